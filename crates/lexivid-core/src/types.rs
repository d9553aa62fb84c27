use serde::{Deserialize, Serialize};

/// The kind of content a planned layer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// A solid color fill.
    Solid,
    /// A static image (PNG, JPEG, etc.).
    Image,
    /// Text rendered by the host.
    Text,
    /// An audio clip.
    Audio,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Solid => write!(f, "solid"),
            LayerKind::Image => write!(f, "image"),
            LayerKind::Text => write!(f, "text"),
            LayerKind::Audio => write!(f, "audio"),
        }
    }
}

/// Easing function for keyframe interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Easing {
    /// Apply the easing curve to a normalized progress value in [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Solid.to_string(), "solid");
        assert_eq!(LayerKind::Audio.to_string(), "audio");
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-9);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_midpoint() {
        // Quadratic ease-in at 0.5 is 0.25.
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-9);
    }
}
