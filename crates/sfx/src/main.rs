use std::process::ExitCode;

use anyhow::{Context, Result};
use sfx_archive::{ExtractOptions, ExtractReport};
use sfx_platform::{Launch, Shortcut, ShortcutOutcome, executable_path};
use tracing::{info, warn};

use crate::cli::App;
use crate::ui::tracker::ProgressTracker;

mod cli;
mod logging;
mod payload;
mod ui;

fn main() -> ExitCode {
    logging::init();
    let app = App::parse_args();

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: &App) -> Result<()> {
    let tracker = ProgressTracker::new();
    let report = sfx_archive::install(
        payload::RESOURCES,
        app.path.clone(),
        ExtractOptions::default(),
        &tracker,
    )
    .context("Install failed")?;

    let exe = executable_path(&report.target, &report.app_base)
        .context("Failed to resolve installed executable")?;
    println!("Target directory    : {}", report.target.display());
    println!("Installed executable: {}", exe.display());

    if app.create_shortcut() {
        create_shortcut(app, &report, &exe);
    }

    Launch::new(&exe)
        .current_dir(&report.target)
        .console(app.console)
        .spawn()
        .context("Failed to start executable")?;
    println!("Application launched, exiting installer");
    Ok(())
}

fn create_shortcut(app: &App, report: &ExtractReport, exe: &std::path::Path) {
    let name = app.shortcut_name(&report.app_base);
    match Shortcut::new(name, exe).create() {
        Ok(ShortcutOutcome::Created(path)) => info!(shortcut = %path.display(), "desktop shortcut created"),
        Ok(ShortcutOutcome::AlreadyExists(path)) => {
            info!(shortcut = %path.display(), "desktop shortcut already present")
        }
        Err(err) => warn!("failed to create desktop shortcut: {err}"),
    }
}
