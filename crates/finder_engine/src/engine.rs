use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_logging::{finder_error, finder_info};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search { request_id: RequestId, url: String },
}

/// Runs searches on a background tokio runtime and reports completions.
///
/// There is no cancellation: every enqueued search runs to completion and
/// produces exactly one `EngineEvent::SearchCompleted`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a search. Returns `false` if the engine thread is gone, in which
    /// case no completion event will ever arrive for `request_id`.
    pub fn search(&self, request_id: RequestId, url: impl Into<String>) -> bool {
        self.cmd_tx
            .send(EngineCommand::Search {
                request_id,
                url: url.into(),
            })
            .is_ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, url } => {
            let result = fetcher.fetch(request_id, &url).await;
            match &result {
                Ok(recipes) => {
                    finder_info!("search {} returned {} recipes", request_id, recipes.len())
                }
                Err(err) => finder_error!("search {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_reports_stopped_engine() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx, event_rx };

        assert!(!engine.search(1, "http://localhost/recipes"));
        assert!(engine.try_recv().is_none());
    }
}
