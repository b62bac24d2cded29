use phishguard_core::{ScanId, ScanResult};
use scan_logging::{scan_info, scan_warn};
use tokio::time::Instant;

use crate::{Classifier, EngineEvent, EventSink, ProgressAnimation, ScanError};

/// Runs one scan: the full progress animation, then a single classification call.
///
/// Exactly one [`EngineEvent::ScanCompleted`] is emitted per call, even if the
/// future is dropped or the classifier panics part-way, so the UI always leaves
/// its busy state. The reported elapsed time covers animation and network.
pub async fn run_scan(
    classifier: &dyn Classifier,
    animation: &ProgressAnimation,
    scan_id: ScanId,
    url: &str,
    sink: &dyn EventSink,
) {
    let guard = CompletionGuard::new(scan_id, url, sink);

    animation.play(scan_id, sink).await;
    let result = classifier.classify(url).await;

    match &result {
        Ok(outcome) => scan_info!(
            "scan {} url={} result={} probability={:.3} factors={}",
            scan_id,
            url,
            outcome.label,
            outcome.probability,
            outcome.risk_factors.len()
        ),
        Err(err) => scan_warn!("scan {} url={} failed: {}", scan_id, url, err),
    }
    guard.complete(result);
}

struct CompletionGuard<'a> {
    scan_id: ScanId,
    url: String,
    started: Instant,
    sink: &'a dyn EventSink,
    completed: bool,
}

impl<'a> CompletionGuard<'a> {
    fn new(scan_id: ScanId, url: &str, sink: &'a dyn EventSink) -> Self {
        Self {
            scan_id,
            url: url.to_string(),
            started: Instant::now(),
            sink,
            completed: false,
        }
    }

    fn complete(mut self, result: Result<ScanResult, ScanError>) {
        self.completed = true;
        self.emit(result);
    }

    fn emit(&mut self, result: Result<ScanResult, ScanError>) {
        self.sink.emit(EngineEvent::ScanCompleted {
            scan_id: self.scan_id,
            url: std::mem::take(&mut self.url),
            elapsed: self.started.elapsed(),
            result,
        });
    }
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            scan_warn!("scan {} url={} aborted", self.scan_id, self.url);
            self.emit(Err(ScanError::Aborted));
        }
    }
}
