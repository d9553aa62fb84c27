use serde::{Deserialize, Serialize};

use lexivid_core::config::CompositionConfig;
use lexivid_core::{Color, Duration, LexividResult, Size2D, Timestamp};

use crate::layer::LayerPlan;

/// Fixed canvas and timing settings shared by every generated composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionSettings {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration: Duration,
    pub background: Color,
}

impl CompositionSettings {
    pub fn from_config(config: &CompositionConfig) -> LexividResult<Self> {
        Ok(Self {
            width: config.width,
            height: config.height,
            fps: config.fps,
            duration: Duration::from_seconds(config.duration_secs),
            background: config.background_color()?,
        })
    }

    /// Canvas dimensions as a float size for layout math.
    pub fn canvas(&self) -> Size2D {
        Size2D::new(self.width as f64, self.height as f64)
    }

    /// Total frames at the configured frame rate.
    pub fn frame_count(&self) -> u64 {
        self.duration.frame_count(self.fps)
    }
}

/// A fully planned composition: named, sized, and populated with layers in
/// stacking order (bottom to top), plus the render output it should produce.
/// Plans are derived fresh per manifest record and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionPlan {
    pub name: String,
    pub settings: CompositionSettings,
    /// Layers bottom to top.
    pub layers: Vec<LayerPlan>,
    /// File name of the render output (within the run's output directory).
    pub output_file: String,
}

impl CompositionPlan {
    pub fn new(name: impl Into<String>, settings: CompositionSettings, output_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings,
            layers: Vec::new(),
            output_file: output_file.into(),
        }
    }

    /// Append a layer on top of the current stack.
    pub fn push_layer(&mut self, layer: LayerPlan) {
        self.layers.push(layer);
    }

    pub fn layer(&self, id: &str) -> Option<&LayerPlan> {
        self.layers.iter().find(|l| l.id.0 == id)
    }

    /// The time span the render job covers: the whole composition.
    pub fn render_span(&self) -> (Timestamp, Duration) {
        (Timestamp::zero(), self.settings.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{LayerId, LayerSource};

    fn settings() -> CompositionSettings {
        CompositionSettings::from_config(&CompositionConfig::default()).unwrap()
    }

    #[test]
    fn test_settings_from_default_config() {
        let s = settings();
        assert_eq!(s.width, 1920);
        assert_eq!(s.height, 1080);
        assert_eq!(s.background, Color::WHITE);
        assert_eq!(s.frame_count(), 450);
        assert_eq!(s.canvas(), Size2D::new(1920.0, 1080.0));
    }

    #[test]
    fn test_plan_layer_lookup() {
        let mut plan = CompositionPlan::new("Video_Cat", settings(), "output_cat.mp4");
        plan.push_layer(LayerPlan::new(
            LayerId::new("background"),
            LayerSource::Solid {
                color: Color::WHITE,
                size: Size2D::new(1920.0, 1080.0),
            },
        ));
        assert!(plan.layer("background").is_some());
        assert!(plan.layer("missing").is_none());
    }

    #[test]
    fn test_render_span_covers_whole_composition() {
        let plan = CompositionPlan::new("Video_Cat", settings(), "output_cat.mp4");
        let (start, duration) = plan.render_span();
        assert!(start.as_seconds().abs() < 1e-9);
        assert!((duration.as_seconds() - 15.0).abs() < 1e-9);
    }
}
