//! # lexivid-host
//!
//! The host boundary of lexivid. Compositions are planned as pure data in
//! `lexivid-plan`; everything that touches the outside world lives here:
//! the `CompositionHost` trait the plans are applied against, the project
//! session context, asset resolution and probing, the render queue, an
//! in-memory recording host for tests, a JSON project-document host for
//! real runs, and the batch generator driving a whole manifest.

pub mod apply;
pub mod document;
pub mod generator;
pub mod host;
pub mod memory;
pub mod probe;
pub mod queue;
pub mod session;

pub use apply::apply_plan;
pub use document::{DocumentHost, ProjectDocument};
pub use generator::{GenerationReport, Generator};
pub use host::{CompositionHost, CompositionId, LayerRef};
pub use memory::MemoryHost;
pub use queue::{JobOutcome, RenderJob, RenderReceipt};
pub use session::ProjectSession;
