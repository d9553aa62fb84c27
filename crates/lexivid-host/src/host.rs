use std::path::Path;

use lexivid_core::LexividResult;
use lexivid_plan::animation::Keyframe;
use lexivid_plan::{CompositionSettings, LayerPlan, TrackProperty};

use crate::queue::{RenderJob, RenderReceipt};

/// Handle to a composition created on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositionId(pub usize);

/// Handle to a layer within a host composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerRef(pub usize);

/// The capability set the per-record algorithm needs from a host
/// application. Everything behind this trait is external: rendering,
/// encoding, and the actual project file format belong to the host.
///
/// `add_layer` receives a layer's static description only; animated
/// keyframes are delivered one at a time through `set_keyframe`.
pub trait CompositionHost {
    /// Create an empty composition with the given name and settings.
    fn create_composition(
        &mut self,
        name: &str,
        settings: &CompositionSettings,
    ) -> LexividResult<CompositionId>;

    /// Add a layer on top of the composition's current stack.
    fn add_layer(&mut self, comp: CompositionId, layer: &LayerPlan) -> LexividResult<LayerRef>;

    /// Pin a property value at a point in composition time.
    fn set_keyframe(
        &mut self,
        comp: CompositionId,
        layer: LayerRef,
        property: TrackProperty,
        keyframe: &Keyframe,
    ) -> LexividResult<()>;

    /// Queue a render job for the composition.
    fn enqueue_render(&mut self, comp: CompositionId, job: RenderJob) -> LexividResult<()>;

    /// Execute all queued jobs, blocking until done. Returns one receipt
    /// per job, in queue order.
    fn run_queue(&mut self) -> LexividResult<Vec<RenderReceipt>>;

    /// Persist the host's project state to the given checkpoint path.
    fn save_project(&mut self, path: &Path) -> LexividResult<()>;
}
