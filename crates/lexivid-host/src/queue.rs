use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use lexivid_core::hash;
use lexivid_core::{Duration, Timestamp};

/// A queued render request: one composition to one output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderJob {
    /// Deterministic job id derived from the job's content.
    pub id: String,
    pub composition: String,
    pub output: PathBuf,
    pub span_start: Timestamp,
    pub span_duration: Duration,
    /// Output-module template requested from the host (e.g. "Lossless").
    pub template: String,
}

impl RenderJob {
    pub fn new(
        composition: impl Into<String>,
        output: impl Into<PathBuf>,
        span_start: Timestamp,
        span_duration: Duration,
        template: impl Into<String>,
    ) -> Self {
        let composition = composition.into();
        let output = output.into();
        let template = template.into();
        let digest = hash::hash_fields(&[
            composition.as_bytes(),
            output.to_string_lossy().as_bytes(),
            template.as_bytes(),
            &span_start.as_seconds().to_le_bytes(),
            &span_duration.as_seconds().to_le_bytes(),
        ]);
        Self {
            id: format!("job_{}", digest.short()),
            composition,
            output,
            span_start,
            span_duration,
            template,
        }
    }
}

/// How a queued job was resolved when the queue ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    /// The host executed the render itself.
    Completed,
    /// An external renderer command was spawned and exited successfully.
    Dispatched,
    /// A render-spec handoff file was written next to the target output.
    SpecWritten,
}

/// The completion record of one render job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReceipt {
    pub job_id: String,
    pub composition: String,
    pub output: PathBuf,
    pub outcome: JobOutcome,
}
