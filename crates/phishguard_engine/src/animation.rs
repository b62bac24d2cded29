use std::time::Duration;

use phishguard_core::{ScanId, ScanStage};
use scan_logging::scan_trace;

use crate::{EngineEvent, EventSink};

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(600);

/// Cosmetic staged progress played before every classification request.
///
/// Stages are activated strictly in order, each followed by `step_delay`.
/// Playback cannot be cancelled or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressAnimation {
    pub stages: Vec<ScanStage>,
    pub step_delay: Duration,
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self {
            stages: ScanStage::ALL.to_vec(),
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl ProgressAnimation {
    pub fn with_step_delay(step_delay: Duration) -> Self {
        Self {
            step_delay,
            ..Self::default()
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.step_delay * self.stages.len() as u32
    }

    pub async fn play(&self, scan_id: ScanId, sink: &dyn EventSink) {
        for stage in &self.stages {
            scan_trace!("scan {} stage {:?}", scan_id, stage);
            sink.emit(EngineEvent::StageActivated {
                scan_id,
                stage: *stage,
            });
            tokio::time::sleep(self.step_delay).await;
        }
    }
}
