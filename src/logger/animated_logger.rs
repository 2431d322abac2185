use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner on stderr while a model call is in flight. A disabled
/// logger prints nothing, which keeps JSON output and tests clean.
pub struct AnimatedLogger {
    message: String,
    enabled: bool,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        Self {
            message,
            enabled: true,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn silent(message: String) -> Self {
        Self {
            enabled: false,
            ..Self::new(message)
        }
    }

    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(120));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", FRAMES[frame], message);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self, symbol: &str, final_message: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if self.enabled {
            eprint!("\r\x1b[K{} {}\n", symbol, final_message);
            let _ = std::io::stderr().flush();
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt("✅", final_message).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt("❌", error_message).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_logger_never_spawns() {
        tokio_test::block_on(async {
            let mut logger = AnimatedLogger::silent("quiet".to_string());
            logger.start();
            assert!(logger.task_handle.is_none());
            logger.stop("done").await;
        });
    }

    #[test]
    fn test_stop_joins_spinner_task() {
        tokio_test::block_on(async {
            let mut logger = AnimatedLogger::new("working".to_string());
            logger.start();
            assert!(logger.task_handle.is_some());

            logger.error("failed").await;
            assert!(logger.task_handle.is_none());
            assert!(logger.stop_sender.is_none());
        });
    }
}
