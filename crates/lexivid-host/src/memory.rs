//! An in-memory recording host.
//!
//! Implements `CompositionHost` without any rendering engine so the
//! per-record algorithm can be exercised and inspected in tests.

use std::path::{Path, PathBuf};

use lexivid_core::{LexividError, LexividResult};
use lexivid_plan::animation::{Keyframe, PropertyTrack};
use lexivid_plan::{CompositionSettings, LayerPlan, TrackProperty};

use crate::host::{CompositionHost, CompositionId, LayerRef};
use crate::queue::{JobOutcome, RenderJob, RenderReceipt};

/// A composition as the fake host recorded it.
#[derive(Debug, Clone)]
pub struct RecordedComposition {
    pub name: String,
    pub settings: CompositionSettings,
    /// Layers in the order they were added (bottom to top).
    pub layers: Vec<LayerPlan>,
}

/// In-memory fake host: records every call, completes every queued job.
#[derive(Debug, Default)]
pub struct MemoryHost {
    compositions: Vec<RecordedComposition>,
    queue: Vec<RenderJob>,
    receipts: Vec<RenderReceipt>,
    saves: Vec<PathBuf>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn composition(&self, id: CompositionId) -> Option<&RecordedComposition> {
        self.compositions.get(id.0)
    }

    pub fn composition_by_name(&self, name: &str) -> Option<&RecordedComposition> {
        self.compositions.iter().find(|c| c.name == name)
    }

    pub fn compositions(&self) -> &[RecordedComposition] {
        &self.compositions
    }

    /// Jobs still waiting for `run_queue`.
    pub fn queued_jobs(&self) -> &[RenderJob] {
        &self.queue
    }

    /// Receipts across every `run_queue` call so far.
    pub fn all_receipts(&self) -> &[RenderReceipt] {
        &self.receipts
    }

    /// Checkpoint paths passed to `save_project`, in order.
    pub fn saves(&self) -> &[PathBuf] {
        &self.saves
    }

    fn composition_mut(&mut self, id: CompositionId) -> LexividResult<&mut RecordedComposition> {
        self.compositions
            .get_mut(id.0)
            .ok_or_else(|| LexividError::Host(format!("unknown composition id {}", id.0)))
    }
}

impl CompositionHost for MemoryHost {
    fn create_composition(
        &mut self,
        name: &str,
        settings: &CompositionSettings,
    ) -> LexividResult<CompositionId> {
        self.compositions.push(RecordedComposition {
            name: name.to_string(),
            settings: settings.clone(),
            layers: Vec::new(),
        });
        Ok(CompositionId(self.compositions.len() - 1))
    }

    fn add_layer(&mut self, comp: CompositionId, layer: &LayerPlan) -> LexividResult<LayerRef> {
        let composition = self.composition_mut(comp)?;
        composition.layers.push(layer.clone());
        Ok(LayerRef(composition.layers.len() - 1))
    }

    fn set_keyframe(
        &mut self,
        comp: CompositionId,
        layer: LayerRef,
        property: TrackProperty,
        keyframe: &Keyframe,
    ) -> LexividResult<()> {
        let composition = self.composition_mut(comp)?;
        let layer = composition
            .layers
            .get_mut(layer.0)
            .ok_or_else(|| LexividError::Host(format!("unknown layer ref {}", layer.0)))?;

        match layer.tracks.iter_mut().find(|t| t.property == property) {
            Some(track) => track.add_keyframe(keyframe.clone()),
            None => {
                let mut track = PropertyTrack::new(property);
                track.add_keyframe(keyframe.clone());
                layer.tracks.push(track);
            }
        }
        Ok(())
    }

    fn enqueue_render(&mut self, comp: CompositionId, job: RenderJob) -> LexividResult<()> {
        // The composition must exist before a job can target it.
        self.composition_mut(comp)?;
        self.queue.push(job);
        Ok(())
    }

    fn run_queue(&mut self) -> LexividResult<Vec<RenderReceipt>> {
        let batch: Vec<RenderReceipt> = self
            .queue
            .drain(..)
            .map(|job| RenderReceipt {
                job_id: job.id,
                composition: job.composition,
                output: job.output,
                outcome: JobOutcome::Completed,
            })
            .collect();
        self.receipts.extend(batch.iter().cloned());
        Ok(batch)
    }

    fn save_project(&mut self, path: &Path) -> LexividResult<()> {
        self.saves.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexivid_core::config::CompositionConfig;
    use lexivid_core::{Color, Duration, Size2D, Timestamp};
    use lexivid_plan::{LayerId, LayerSource};

    fn settings() -> CompositionSettings {
        CompositionSettings::from_config(&CompositionConfig::default()).unwrap()
    }

    #[test]
    fn test_set_keyframe_builds_tracks() {
        let mut host = MemoryHost::new();
        let comp = host.create_composition("Video_Cat", &settings()).unwrap();
        let layer = host
            .add_layer(
                comp,
                &LayerPlan::new(
                    LayerId::new("background"),
                    LayerSource::Solid {
                        color: Color::WHITE,
                        size: Size2D::new(1920.0, 1080.0),
                    },
                ),
            )
            .unwrap();

        host.set_keyframe(
            comp,
            layer,
            TrackProperty::Opacity,
            &Keyframe::new(Timestamp::from_seconds(1.0), 100.0),
        )
        .unwrap();
        host.set_keyframe(
            comp,
            layer,
            TrackProperty::Opacity,
            &Keyframe::new(Timestamp::from_seconds(0.0), 0.0),
        )
        .unwrap();

        let recorded = host.composition(comp).unwrap();
        let track = recorded.layers[0].track(TrackProperty::Opacity).unwrap();
        assert_eq!(track.keyframes.len(), 2);
        // Kept sorted regardless of delivery order.
        assert!(track.keyframes[0].at < track.keyframes[1].at);
    }

    #[test]
    fn test_run_queue_drains_and_completes() {
        let mut host = MemoryHost::new();
        let comp = host.create_composition("Video_Cat", &settings()).unwrap();
        host.enqueue_render(
            comp,
            RenderJob::new(
                "Video_Cat",
                "/out/output_cat.mp4",
                Timestamp::zero(),
                Duration::from_seconds(15.0),
                "Lossless",
            ),
        )
        .unwrap();

        let receipts = host.run_queue().unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].outcome, JobOutcome::Completed);
        assert!(host.queued_jobs().is_empty());
        // A second run has nothing left to do.
        assert!(host.run_queue().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut host = MemoryHost::new();
        let err = host
            .add_layer(
                CompositionId(7),
                &LayerPlan::new(
                    LayerId::new("x"),
                    LayerSource::Text {
                        text: "x".into(),
                        font_size: None,
                    },
                ),
            )
            .unwrap_err();
        assert!(matches!(err, LexividError::Host(_)));
    }
}
