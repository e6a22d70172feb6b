use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use flow_logging::flow_debug;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{ApiRequest, EngineEvent, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Submit(ApiRequest),
}

/// Runs requests on a background tokio runtime and reports completions over
/// a channel. Requests are never aborted; callers discard stale results.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            flow_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request: ApiRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit(request));
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
        EngineCommand::Submit(request) => {
            let result = fetcher.fetch(&request).await;
            let _ = event_tx.send(EngineEvent::Completed {
                id: request.id,
                endpoint: request.endpoint,
                result,
            });
        }
    }
}
