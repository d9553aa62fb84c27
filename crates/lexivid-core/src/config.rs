use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{LexividError, LexividResult};

/// Canvas and timing settings for every generated composition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompositionConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration_secs: f64,
    /// Background color as a hex string.
    pub background: String,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30.0,
            duration_secs: 15.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

impl CompositionConfig {
    /// Parse the configured background hex color.
    pub fn background_color(&self) -> LexividResult<Color> {
        Color::from_hex(&self.background)
            .map_err(|_| LexividError::Config(format!("invalid background color: {}", self.background)))
    }
}

/// Knobs for the letter-reveal and audio animations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Letter scale percentage at the start of its reveal window.
    pub initial_scale: f64,
    /// Letter scale percentage at the end of its reveal window.
    pub final_scale: f64,
    /// Total plays of the main audio clip; 1 means no repeats.
    pub audio_repeats: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            initial_scale: 0.0,
            final_scale: 500.0,
            audio_repeats: 1,
        }
    }
}

/// Fixed paths within the project directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Logo/mascot image, required for every record.
    pub logo: String,
    /// Project checkpoint file written after each record.
    pub checkpoint_file: String,
    /// Subfolder receiving the rendered outputs.
    pub output_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            logo: "Assets/Images/mascot.jpg".to_string(),
            checkpoint_file: "Main_Template.aep".to_string(),
            output_dir: "Generated_Comps".to_string(),
        }
    }
}

/// Render hand-off settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output-module template requested from the host.
    pub template: String,
    /// Optional external renderer command. Placeholders `{project}`,
    /// `{composition}` and `{output}` are substituted per job.
    pub command: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: "Lossless".to_string(),
            command: None,
        }
    }
}

/// Top-level generator configuration, loaded from `lexivid.config.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub composition: CompositionConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl GeneratorConfig {
    /// Default config file name, looked up in the project directory.
    pub const FILE_NAME: &'static str = "lexivid.config.toml";

    pub fn load_from_file(path: &std::path::Path) -> LexividResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| LexividError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> LexividResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LexividError::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
