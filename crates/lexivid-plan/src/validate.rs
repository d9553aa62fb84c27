use lexivid_core::LexividError;

use crate::composition::CompositionPlan;

/// Validate a composition plan for structural correctness before it is
/// handed to a host. All problems are collected, not just the first.
pub fn validate_plan(plan: &CompositionPlan) -> Result<(), Vec<LexividError>> {
    let mut errors = Vec::new();

    if plan.name.is_empty() {
        errors.push(LexividError::PlanValidation(
            "composition name must be non-empty".into(),
        ));
    }

    if plan.output_file.is_empty() {
        errors.push(LexividError::PlanValidation(
            "output file name must be non-empty".into(),
        ));
    }

    if plan.settings.width == 0 || plan.settings.height == 0 {
        errors.push(LexividError::PlanValidation(
            "composition resolution must be non-zero".into(),
        ));
    }

    if plan.settings.fps <= 0.0 {
        errors.push(LexividError::PlanValidation(
            "composition fps must be positive".into(),
        ));
    }

    if plan.settings.duration.is_zero() {
        errors.push(LexividError::PlanValidation(
            "composition duration must be positive".into(),
        ));
    }

    let mut layer_ids = std::collections::HashSet::new();
    for layer in &plan.layers {
        if !layer_ids.insert(&layer.id) {
            errors.push(LexividError::PlanValidation(format!(
                "duplicate layer id '{}' in composition '{}'",
                layer.id, plan.name
            )));
        }

        if layer.out_point <= layer.start {
            errors.push(LexividError::PlanValidation(format!(
                "layer '{}' has an empty active range ({} >= {})",
                layer.id, layer.start, layer.out_point
            )));
        }

        for track in &layer.tracks {
            if track.keyframes.is_empty() {
                errors.push(LexividError::PlanValidation(format!(
                    "layer '{}' has an empty {} track",
                    layer.id, track.property
                )));
            }
            let sorted = track
                .keyframes
                .windows(2)
                .all(|pair| pair[0].at <= pair[1].at);
            if !sorted {
                errors.push(LexividError::PlanValidation(format!(
                    "layer '{}' has unsorted {} keyframes",
                    layer.id, track.property
                )));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Keyframe, PropertyTrack, TrackProperty};
    use crate::composition::CompositionSettings;
    use crate::layer::{LayerId, LayerPlan, LayerSource};
    use lexivid_core::config::CompositionConfig;
    use lexivid_core::{Color, Size2D, Timestamp};

    fn plan() -> CompositionPlan {
        let settings = CompositionSettings::from_config(&CompositionConfig::default()).unwrap();
        CompositionPlan::new("Video_Cat", settings, "output_cat.mp4")
    }

    fn solid(id: &str) -> LayerPlan {
        LayerPlan::new(
            LayerId::new(id),
            LayerSource::Solid {
                color: Color::WHITE,
                size: Size2D::new(1920.0, 1080.0),
            },
        )
        .with_span(Timestamp::zero(), Timestamp::from_seconds(15.0))
    }

    #[test]
    fn test_valid_plan_passes() {
        let mut p = plan();
        p.push_layer(solid("background"));
        assert!(validate_plan(&p).is_ok());
    }

    #[test]
    fn test_duplicate_layer_ids_rejected() {
        let mut p = plan();
        p.push_layer(solid("background"));
        p.push_layer(solid("background"));
        let errors = validate_plan(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("duplicate layer id")));
    }

    #[test]
    fn test_empty_active_range_rejected() {
        let mut p = plan();
        p.push_layer(solid("background").with_span(
            Timestamp::from_seconds(5.0),
            Timestamp::from_seconds(5.0),
        ));
        let errors = validate_plan(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("empty active range")));
    }

    #[test]
    fn test_empty_track_rejected() {
        let mut p = plan();
        p.push_layer(solid("background").with_track(PropertyTrack::new(TrackProperty::Opacity)));
        let errors = validate_plan(&p).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("empty")));
    }

    #[test]
    fn test_unsorted_keyframes_rejected() {
        let mut track = PropertyTrack::new(TrackProperty::Opacity);
        // Bypass add_keyframe's sorting to simulate a hand-built track.
        track.keyframes = vec![
            Keyframe::new(Timestamp::from_seconds(2.0), 0.0),
            Keyframe::new(Timestamp::from_seconds(1.0), 100.0),
        ];
        let mut p = plan();
        p.push_layer(solid("background").with_track(track));
        let errors = validate_plan(&p).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("unsorted")));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let mut p = plan();
        p.settings.width = 0;
        p.push_layer(solid("background"));
        assert!(validate_plan(&p).is_err());
    }
}
