//! The plan player: replays a declarative `CompositionPlan` through a
//! `CompositionHost`, layer by layer and keyframe by keyframe.

use std::path::Path;

use lexivid_core::LexividResult;
use lexivid_plan::CompositionPlan;

use crate::host::{CompositionHost, CompositionId};
use crate::queue::RenderJob;

/// Apply a plan to a host: create the composition, add every layer in
/// stacking order (bottom to top), and replay every keyframe.
pub fn apply_plan(
    host: &mut dyn CompositionHost,
    plan: &CompositionPlan,
) -> LexividResult<CompositionId> {
    let comp = host.create_composition(&plan.name, &plan.settings)?;

    for layer in &plan.layers {
        let layer_ref = host.add_layer(comp, &layer.without_tracks())?;
        for track in &layer.tracks {
            for keyframe in &track.keyframes {
                host.set_keyframe(comp, layer_ref, track.property, keyframe)?;
            }
        }
    }

    Ok(comp)
}

/// Queue the plan's render job: the whole composition to its output file
/// inside `output_dir`.
pub fn enqueue_plan_render(
    host: &mut dyn CompositionHost,
    comp: CompositionId,
    plan: &CompositionPlan,
    output_dir: &Path,
    template: &str,
) -> LexividResult<RenderJob> {
    let (span_start, span_duration) = plan.render_span();
    let job = RenderJob::new(
        plan.name.clone(),
        output_dir.join(&plan.output_file),
        span_start,
        span_duration,
        template,
    );
    host.enqueue_render(comp, job.clone())?;
    Ok(job)
}
