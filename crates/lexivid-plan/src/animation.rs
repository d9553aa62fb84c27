use serde::{Deserialize, Serialize};

use lexivid_core::{Easing, Timestamp};

/// Identifies the layer property a track animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackProperty {
    Opacity,
    ScaleX,
    ScaleY,
}

impl std::fmt::Display for TrackProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackProperty::Opacity => write!(f, "opacity"),
            TrackProperty::ScaleX => write!(f, "scale.x"),
            TrackProperty::ScaleY => write!(f, "scale.y"),
        }
    }
}

/// A keyframe: a property value pinned at a point in composition time.
///
/// Times are composition-global; a layer's in-point delays its visibility
/// but never re-bases its keyframes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyframe {
    pub at: Timestamp,
    pub value: f64,
    /// Easing applied when interpolating TO this keyframe.
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(at: Timestamp, value: f64) -> Self {
        Self {
            at,
            value,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// An animated property: keyframes kept sorted by time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyTrack {
    pub property: TrackProperty,
    pub keyframes: Vec<Keyframe>,
}

impl PropertyTrack {
    pub fn new(property: TrackProperty) -> Self {
        Self {
            property,
            keyframes: Vec::new(),
        }
    }

    /// A simple linear two-keyframe ramp.
    pub fn from_to(property: TrackProperty, t0: f64, v0: f64, t1: f64, v1: f64) -> Self {
        Self {
            property,
            keyframes: vec![
                Keyframe::new(Timestamp::from_seconds(t0), v0),
                Keyframe::new(Timestamp::from_seconds(t1), v1),
            ],
        }
    }

    /// A single pinned value.
    pub fn pinned(property: TrackProperty, at: f64, value: f64) -> Self {
        Self {
            property,
            keyframes: vec![Keyframe::new(Timestamp::from_seconds(at), value)],
        }
    }

    /// Add a keyframe, keeping the track sorted by time.
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        self.keyframes.sort_by(|a, b| {
            a.at
                .as_seconds()
                .partial_cmp(&b.at.as_seconds())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// The time range covered by this track's keyframes.
    pub fn span(&self) -> Option<(Timestamp, Timestamp)> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        Some((first.at, last.at))
    }

    /// Sample the track at a point in composition time.
    ///
    /// Before the first keyframe the first value holds; after the last the
    /// last value holds. Returns None for an empty track.
    pub fn value_at(&self, at: Timestamp) -> Option<f64> {
        let first = self.keyframes.first()?;
        let t = at.as_seconds();

        if t <= first.at.as_seconds() {
            return Some(first.value);
        }

        let last = self.keyframes.last()?;
        if t >= last.at.as_seconds() {
            return Some(last.value);
        }

        for pair in self.keyframes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ta, tb) = (a.at.as_seconds(), b.at.as_seconds());
            if t >= ta && t <= tb {
                let segment = tb - ta;
                if segment == 0.0 {
                    return Some(b.value);
                }
                let progress = b.easing.apply((t - ta) / segment);
                return Some(a.value + (b.value - a.value) * progress);
            }
        }

        Some(last.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_to_linear() {
        let track = PropertyTrack::from_to(TrackProperty::Opacity, 0.0, 0.0, 1.0, 100.0);
        assert_eq!(track.value_at(Timestamp::from_seconds(0.0)), Some(0.0));
        assert_eq!(track.value_at(Timestamp::from_seconds(0.5)), Some(50.0));
        assert_eq!(track.value_at(Timestamp::from_seconds(1.0)), Some(100.0));
    }

    #[test]
    fn test_value_holds_outside_span() {
        let track = PropertyTrack::from_to(TrackProperty::Opacity, 2.0, 100.0, 2.5, 0.0);
        // Before the first keyframe the first value holds.
        assert_eq!(track.value_at(Timestamp::from_seconds(0.0)), Some(100.0));
        // After the last keyframe the last value holds.
        assert_eq!(track.value_at(Timestamp::from_seconds(10.0)), Some(0.0));
    }

    #[test]
    fn test_empty_track_samples_none() {
        let track = PropertyTrack::new(TrackProperty::ScaleX);
        assert!(track.value_at(Timestamp::zero()).is_none());
        assert!(track.span().is_none());
    }

    #[test]
    fn test_add_keyframe_keeps_sorted() {
        let mut track = PropertyTrack::new(TrackProperty::ScaleX);
        track.add_keyframe(Keyframe::new(Timestamp::from_seconds(2.0), 500.0));
        track.add_keyframe(Keyframe::new(Timestamp::from_seconds(1.0), 0.0));
        let (start, end) = track.span().unwrap();
        assert!((start.as_seconds() - 1.0).abs() < 1e-9);
        assert!((end.as_seconds() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pinned_value() {
        let track = PropertyTrack::pinned(TrackProperty::ScaleY, 14.0, 150.0);
        assert_eq!(track.value_at(Timestamp::from_seconds(0.0)), Some(150.0));
        assert_eq!(track.value_at(Timestamp::from_seconds(14.5)), Some(150.0));
    }

    #[test]
    fn test_eased_segment() {
        let mut track = PropertyTrack::new(TrackProperty::Opacity);
        track.add_keyframe(Keyframe::new(Timestamp::from_seconds(0.0), 0.0));
        track.add_keyframe(
            Keyframe::new(Timestamp::from_seconds(1.0), 100.0).with_easing(Easing::EaseIn),
        );
        let mid = track.value_at(Timestamp::from_seconds(0.5)).unwrap();
        assert!(mid < 50.0, "ease-in midpoint should lag linear, got {}", mid);
    }
}
