//! A project-document host.
//!
//! Mirrors every host call into a serializable project document, persists
//! it as JSON at the session checkpoint path, and resolves queued render
//! jobs by either spawning a configured external renderer or writing a
//! render-spec handoff file per job. Actual encoding belongs to the
//! external renderer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use lexivid_core::config::RenderConfig;
use lexivid_core::{hash, LexividError, LexividResult};
use lexivid_plan::animation::{Keyframe, PropertyTrack};
use lexivid_plan::{CompositionSettings, LayerPlan, TrackProperty};

use crate::host::{CompositionHost, CompositionId, LayerRef};
use crate::queue::{JobOutcome, RenderJob, RenderReceipt};

/// One composition as stored in the project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocComposition {
    pub name: String,
    pub settings: CompositionSettings,
    pub layers: Vec<LayerPlan>,
}

/// The serializable project state written to the checkpoint file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub id: String,
    pub compositions: Vec<DocComposition>,
}

impl ProjectDocument {
    fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            compositions: Vec::new(),
        }
    }
}

/// Expand a renderer command template into argv form, substituting
/// `{composition}`, `{output}` and `{project}` per job.
fn expand_command(template: &str, job: &RenderJob, checkpoint: Option<&Path>) -> Vec<String> {
    let project = checkpoint
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    template
        .split_whitespace()
        .map(|part| {
            part.replace("{composition}", &job.composition)
                .replace("{output}", &job.output.display().to_string())
                .replace("{project}", &project)
        })
        .collect()
}

/// Host implementation backed by a JSON project document.
#[derive(Debug)]
pub struct DocumentHost {
    document: ProjectDocument,
    queue: Vec<RenderJob>,
    render_command: Option<String>,
    last_checkpoint: Option<PathBuf>,
}

impl DocumentHost {
    pub fn new(render: &RenderConfig) -> Self {
        Self {
            document: ProjectDocument::new(),
            queue: Vec::new(),
            render_command: render.command.clone(),
            last_checkpoint: None,
        }
    }

    pub fn document(&self) -> &ProjectDocument {
        &self.document
    }

    fn composition_mut(&mut self, id: CompositionId) -> LexividResult<&mut DocComposition> {
        self.document
            .compositions
            .get_mut(id.0)
            .ok_or_else(|| LexividError::Host(format!("unknown composition id {}", id.0)))
    }

    /// Spawn the configured external renderer for one job.
    fn dispatch(&self, command: &str, job: &RenderJob) -> LexividResult<()> {
        let argv = expand_command(command, job, self.last_checkpoint.as_deref());
        let program = argv
            .first()
            .ok_or_else(|| LexividError::Render("empty renderer command".into()))?;

        let status = Command::new(program)
            .args(&argv[1..])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| LexividError::Render(format!("failed to run renderer '{}': {}", program, e)))?;

        if !status.success() {
            return Err(LexividError::Render(format!(
                "renderer exited with {} for job {}",
                status, job.id
            )));
        }
        Ok(())
    }

    /// Write the render-spec handoff file for one job.
    fn write_spec(&self, job: &RenderJob) -> LexividResult<PathBuf> {
        if let Some(parent) = job.output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let spec_path = PathBuf::from(format!("{}.renderspec.json", job.output.display()));
        std::fs::write(&spec_path, serde_json::to_string_pretty(job)?)?;
        Ok(spec_path)
    }
}

impl CompositionHost for DocumentHost {
    fn create_composition(
        &mut self,
        name: &str,
        settings: &CompositionSettings,
    ) -> LexividResult<CompositionId> {
        self.document.compositions.push(DocComposition {
            name: name.to_string(),
            settings: settings.clone(),
            layers: Vec::new(),
        });
        Ok(CompositionId(self.document.compositions.len() - 1))
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
        self.composition_mut(comp)?;
        self.queue.push(job);
        Ok(())
    }

    fn run_queue(&mut self) -> LexividResult<Vec<RenderReceipt>> {
        let jobs: Vec<RenderJob> = self.queue.drain(..).collect();
        let mut receipts = Vec::with_capacity(jobs.len());

        for job in jobs {
            let outcome = match self.render_command.clone() {
                Some(command) => {
                    self.dispatch(&command, &job)?;
                    JobOutcome::Dispatched
                }
                None => {
                    let spec_path = self.write_spec(&job)?;
                    tracing::info!(
                        "wrote render spec {} for {}",
                        spec_path.display(),
                        job.composition
                    );
                    JobOutcome::SpecWritten
                }
            };
            receipts.push(RenderReceipt {
                job_id: job.id,
                composition: job.composition,
                output: job.output,
                outcome,
            });
        }

        Ok(receipts)
    }

    fn save_project(&mut self, path: &Path) -> LexividResult<()> {
        let json = serde_json::to_string_pretty(&self.document)?;
        std::fs::write(path, &json)?;
        self.last_checkpoint = Some(path.to_path_buf());
        tracing::debug!(
            "checkpoint {} ({})",
            path.display(),
            hash::hash_fields(&[json.as_bytes()]).short()
        );
        Ok(())
    }
}
