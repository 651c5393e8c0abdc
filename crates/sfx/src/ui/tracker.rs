use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use once_cell::sync::Lazy;
use sfx_archive::{Snapshot, Tracker};

const PB_STYLE: &str = "{spinner} [{bar:50}] {percent:>3}%";

const TICK: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

const PB_CHARS: &str = "= ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Extraction progress line on stdout.
pub struct ProgressTracker {
    pub pb: ProgressBar,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stdout())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(None, target);
        if let Some(pb_style) = PB_TEMPLATE.as_ref() {
            pb.set_style(pb_style.clone());
        }
        ProgressTracker { pb }
    }

    fn update(&self, snapshot: Snapshot) {
        self.pb.set_length(snapshot.total);
        self.pb.set_position(snapshot.copied.min(snapshot.total));
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker for ProgressTracker {
    fn draw(&self, snapshot: Snapshot) {
        self.update(snapshot);
        self.pb.tick();
    }

    fn finish(&self, snapshot: Snapshot) {
        self.update(snapshot);
        self.pb.finish();
    }
}
