use std::time::Duration;

pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;
pub const DEFAULT_FILE_DELAY: Duration = Duration::from_millis(5);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Buffer size used to stream each file.
    pub chunk_size: usize,
    /// Pause after each written file. Only paces the progress display.
    pub file_delay: Option<Duration>,
    /// How often the progress reporter renders.
    pub poll_interval: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            file_delay: Some(DEFAULT_FILE_DELAY),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ExtractOptions {
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes.max(1);
        self
    }

    pub fn file_delay(mut self, delay: Option<Duration>) -> Self {
        self.file_delay = delay;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
