use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use page_logging::{page_debug, page_info};

use crate::request::{RequestSettings, Requester, ReqwestRequester};
use crate::{EngineEvent, FetchError, RequestId};

enum EngineCommand {
    Get { request_id: RequestId, url: String },
}

/// Runs every enqueued request as its own task on a background runtime.
/// Requests are never cancelled or deduplicated; events arrive in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: RequestSettings) -> Result<Self, FetchError> {
        let requester = ReqwestRequester::new(settings)?;
        page_info!("Request engine targeting {}", requester.origin());
        Ok(Self::with_requester(Arc::new(requester)))
    }

    pub fn with_requester(requester: Arc<dyn Requester>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let requester = requester.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(requester.as_ref(), command, event_tx).await;
                });
            }
            // Handle dropped: requests still running after one more second are aborted.
            runtime.shutdown_timeout(Duration::from_secs(1));
        });

        Self { cmd_tx, event_rx }
    }

    pub fn enqueue(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Get {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    requester: &dyn Requester,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Get { request_id, url } => {
            let event = match requester.get(&url).await {
                Ok(response) => {
                    page_debug!(
                        "request {} loaded status={} bytes={}",
                        request_id,
                        response.status,
                        response.body.len()
                    );
                    EngineEvent::Loaded {
                        request_id,
                        response,
                    }
                }
                Err(error) => EngineEvent::Failed { request_id, error },
            };
            let _ = event_tx.send(event);
        }
    }
}
