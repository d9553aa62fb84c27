use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use lexivid_core::{Color, LayerKind, Size2D, Timestamp, Transform2D};

use crate::animation::{PropertyTrack, TrackProperty};

/// Unique identifier for a layer within one composition plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a planned layer renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerSource {
    /// A solid color fill of the given size.
    Solid { color: Color, size: Size2D },
    /// A static image file.
    Image { path: PathBuf },
    /// Text rendered by the host. `font_size` of None means the host default.
    Text {
        text: String,
        font_size: Option<f64>,
    },
    /// An audio clip file.
    Audio { path: PathBuf },
}

/// One layer of a composition plan: content, static transform, active time
/// range, and animated property tracks.
///
/// Keyframe times are composition-global. The in-point (`start`) gates when
/// the layer contributes at all; it does not re-base track times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerPlan {
    pub id: LayerId,
    pub source: LayerSource,
    pub transform: Transform2D,
    /// In-point: the layer is inactive before this time.
    pub start: Timestamp,
    /// Out-point: the layer is inactive from this time on.
    pub out_point: Timestamp,
    pub tracks: Vec<PropertyTrack>,
}

impl LayerPlan {
    pub fn new(id: LayerId, source: LayerSource) -> Self {
        Self {
            id,
            source,
            transform: Transform2D::identity(),
            start: Timestamp::zero(),
            out_point: Timestamp::zero(),
            tracks: Vec::new(),
        }
    }

    /// Builder: set the static transform.
    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: set the active time range.
    pub fn with_span(mut self, start: Timestamp, out_point: Timestamp) -> Self {
        self.start = start;
        self.out_point = out_point;
        self
    }

    /// Builder: add an animated property track.
    pub fn with_track(mut self, track: PropertyTrack) -> Self {
        self.tracks.push(track);
        self
    }

    /// A copy of the layer's static description with no animated tracks.
    /// Hosts receive this through `add_layer`; keyframes follow one at a
    /// time so the two capabilities stay independent.
    pub fn without_tracks(&self) -> LayerPlan {
        LayerPlan {
            tracks: Vec::new(),
            ..self.clone()
        }
    }

    pub fn kind(&self) -> LayerKind {
        match &self.source {
            LayerSource::Solid { .. } => LayerKind::Solid,
            LayerSource::Image { .. } => LayerKind::Image,
            LayerSource::Text { .. } => LayerKind::Text,
            LayerSource::Audio { .. } => LayerKind::Audio,
        }
    }

    /// The track animating `property`, if any.
    pub fn track(&self, property: TrackProperty) -> Option<&PropertyTrack> {
        self.tracks.iter().find(|t| t.property == property)
    }

    /// Effective opacity at a point in composition time, accounting for the
    /// active range: 0 outside `[start, out_point)`, otherwise the opacity
    /// track's value (or 100 when the layer has no opacity track).
    pub fn opacity_at(&self, at: Timestamp) -> f64 {
        if at < self.start || at >= self.out_point {
            return 0.0;
        }
        match self.track(TrackProperty::Opacity) {
            Some(track) => track.value_at(at).unwrap_or(100.0),
            None => 100.0,
        }
    }
}
