use std::path::{Path, PathBuf};

use lexivid_core::{GeneratorConfig, LexividError, LexividResult};

/// Explicit session context for one generation run: the project directory
/// every relative path resolves against, plus the derived output and
/// checkpoint locations.
///
/// Replaces the ambient "currently open project" a host application would
/// otherwise provide.
#[derive(Debug, Clone)]
pub struct ProjectSession {
    project_dir: PathBuf,
    output_dir: PathBuf,
    checkpoint_path: PathBuf,
    logo_path: PathBuf,
}

impl ProjectSession {
    /// Open a session over an existing project directory, creating the
    /// output subfolder when absent.
    pub fn open(
        project_dir: impl Into<PathBuf>,
        config: &GeneratorConfig,
        output_override: Option<PathBuf>,
    ) -> LexividResult<Self> {
        let project_dir = project_dir.into();
        if !project_dir.is_dir() {
            return Err(LexividError::Session(format!(
                "project directory not found: {}",
                project_dir.display()
            )));
        }

        let output_dir =
            output_override.unwrap_or_else(|| project_dir.join(&config.project.output_dir));
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            checkpoint_path: project_dir.join(&config.project.checkpoint_file),
            logo_path: project_dir.join(&config.project.logo),
            project_dir,
            output_dir,
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the project checkpoint is written after each record.
    pub fn checkpoint_path(&self) -> &Path {
        &self.checkpoint_path
    }

    /// The logo/mascot image required for every record.
    pub fn logo_path(&self) -> &Path {
        &self.logo_path
    }

    /// Resolve a manifest-relative path against the project directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }

    /// Full path of a render output within the session's output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
