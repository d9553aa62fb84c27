//! The batch generator: drives a whole manifest through the planner and a
//! host, one record at a time.

use std::path::Path;

use lexivid_core::{GeneratorConfig, LexividResult};
use lexivid_plan::{plan_composition, validate_plan, AssetKind, Manifest};

use crate::host::CompositionHost;
use crate::probe;
use crate::queue::RenderReceipt;
use crate::session::ProjectSession;

/// A record skipped because one of its assets did not resolve.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub word: String,
    pub reason: String,
}

/// Summary of one generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Composition names generated, one per valid record, in manifest order.
    pub generated: Vec<String>,
    /// Records skipped over missing assets.
    pub skipped: Vec<SkippedRecord>,
    /// Render receipts across the whole run.
    pub receipts: Vec<RenderReceipt>,
}

/// Drives the fixed per-record sequence against an injected host.
pub struct Generator<'a> {
    session: &'a ProjectSession,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(session: &'a ProjectSession, config: &'a GeneratorConfig) -> Self {
        Self { session, config }
    }

    /// Run every manifest record to completion.
    ///
    /// Fatal failures (unresolvable logo, host errors, invalid plans) abort
    /// the run. A record whose own image or audio is missing is logged,
    /// skipped, and does not stop the loop — the only recoverable failure.
    pub fn run(
        &self,
        manifest: &Manifest,
        host: &mut dyn CompositionHost,
    ) -> LexividResult<GenerationReport> {
        // The logo is required for every record; resolve it once, fatally.
        let logo = probe::resolve_asset(
            self.session,
            Path::new(&self.config.project.logo),
            AssetKind::Image,
        )?;

        let mut report = GenerationReport::default();

        for record in manifest.iter() {
            let assets = match probe::resolve_record_assets(self.session, record, &logo) {
                Ok(assets) => assets,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("skipping record '{}': {}", record.word, e);
                    report.skipped.push(SkippedRecord {
                        word: record.word.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let plan = plan_composition(record, &assets, self.config)?;
            validate_plan(&plan).map_err(|errors| {
                lexivid_core::LexividError::PlanValidation(
                    errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; "),
                )
            })?;

            let comp = crate::apply::apply_plan(host, &plan)?;
            host.save_project(self.session.checkpoint_path())?;

            let job = crate::apply::enqueue_plan_render(
                host,
                comp,
                &plan,
                self.session.output_dir(),
                &self.config.render.template,
            )?;
            tracing::info!("queued render {} -> {}", plan.name, job.output.display());

            // The queue runs per record, blocking until the host is done.
            report.receipts.extend(host.run_queue()?);
            report.generated.push(plan.name);
        }

        Ok(report)
    }
}
