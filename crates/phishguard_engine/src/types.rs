use std::sync::mpsc;
use std::time::Duration;

use phishguard_core::{ScanId, ScanResult, ScanStage};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    StageActivated {
        scan_id: ScanId,
        stage: ScanStage,
    },
    ScanCompleted {
        scan_id: ScanId,
        url: String,
        elapsed: Duration,
        result: Result<ScanResult, ScanError>,
    },
}

/// Every way a scan can fail. The UI shows them all the same way, by message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("service responded with HTTP {0}")]
    HttpStatus(u16),
    #[error("malformed service response: {0}")]
    Decode(String),
    #[error("service error: {0}")]
    Service(String),
    #[error("scan aborted before completion")]
    Aborted,
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}
