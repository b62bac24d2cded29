use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use phishguard_core::ScanId;
use scan_logging::{scan_debug, scan_error, scan_info};

use crate::scan::run_scan;
use crate::{
    Classifier, ClassifierSettings, EngineEvent, EventSink, ProgressAnimation, ReqwestClassifier,
    ScanError,
};

enum EngineCommand {
    Scan { scan_id: ScanId, url: String },
}

/// Runs scans on a background tokio runtime and reports through an [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    sink: Arc<dyn EventSink>,
}

impl EngineHandle {
    pub fn new(
        settings: ClassifierSettings,
        animation: ProgressAnimation,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        scan_info!("Classifier endpoint {}", settings.endpoint);
        Self::with_classifier(Arc::new(ReqwestClassifier::new(settings)), animation, sink)
    }

    pub fn with_classifier(
        classifier: Arc<dyn Classifier>,
        animation: ProgressAnimation,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let animation = Arc::new(animation);
        let handle_sink = sink.clone();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let animation = animation.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(classifier.as_ref(), &animation, command, sink.as_ref()).await;
                });
            }
            scan_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            sink: handle_sink,
        })
    }

    /// Queues a scan. If the engine thread is gone the scan completes at once
    /// as aborted, so callers never wait on a completion that cannot come.
    pub fn scan(&self, scan_id: ScanId, url: impl Into<String>) {
        let command = EngineCommand::Scan {
            scan_id,
            url: url.into(),
        };
        if let Err(mpsc::SendError(EngineCommand::Scan { scan_id, url })) =
            self.cmd_tx.send(command)
        {
            scan_error!("Engine stopped; scan {} url={} not started", scan_id, url);
            self.sink.emit(EngineEvent::ScanCompleted {
                scan_id,
                url,
                elapsed: Duration::ZERO,
                result: Err(ScanError::Aborted),
            });
        }
    }
}

async fn handle_command(
    classifier: &dyn Classifier,
    animation: &ProgressAnimation,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::Scan { scan_id, url } => {
            run_scan(classifier, animation, scan_id, &url, sink).await;
        }
    }
}
