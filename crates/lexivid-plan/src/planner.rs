//! The fixed per-record planning sequence.
//!
//! Derives a complete `CompositionPlan` from one manifest record, probed
//! asset metadata, and the generator config. Pure data-in/data-out: asset
//! existence has already been validated by the caller, and nothing here
//! touches a host.

use lexivid_core::{GeneratorConfig, LexividError, LexividResult, Point2D, Timestamp, Transform2D};

use crate::animation::{PropertyTrack, TrackProperty};
use crate::asset::ResolvedAssets;
use crate::composition::{CompositionPlan, CompositionSettings};
use crate::layer::{LayerId, LayerPlan, LayerSource};
use crate::manifest::ManifestRecord;

/// Logo fade-out window: opacity 100 -> 0 over [2.0, 2.5] seconds.
pub const LOGO_FADE_START: f64 = 2.0;
pub const LOGO_FADE_SECS: f64 = 0.5;

/// Horizontal spacing between letter layers, in pixels.
pub const LETTER_SPACING_PX: f64 = 50.0;
/// Vertical placement of the letter baseline, as a fraction of canvas height.
pub const TEXT_BASELINE_FRAC: f64 = 0.9;
/// Letter layers are trimmed at this out-point.
pub const LETTER_OUT_SECS: f64 = 5.0;

/// Main image fade-in completes at this time.
pub const IMAGE_FADE_END_SECS: f64 = 4.0;

/// Main word layer: starts here, fade-in keyframes span [0, 7] in
/// composition time, so it ramps from ~71% at its in-point to full by 7s.
pub const WORD_START_SECS: f64 = 5.0;
pub const WORD_FADE_END_SECS: f64 = 7.0;
pub const WORD_FONT_SIZE: f64 = 500.0;
pub const WORD_SCALE_PERCENT: f64 = 150.0;

/// The main audio play and the unconditional second play.
pub const AUDIO_START_SECS: f64 = 3.0;
pub const AUDIO_ECHO_START_SECS: f64 = 8.0;
/// Base offset of the repeated-play schedule: `1 + k × audio_duration`.
pub const AUDIO_REPEAT_BASE_SECS: f64 = 1.0;

/// Composition name derived from the record's word.
pub fn composition_name(word: &str) -> String {
    format!("Video_{}", word)
}

/// Render output file name: a pure function of the word.
pub fn output_file_name(word: &str) -> String {
    format!("output_{}.mp4", word.to_lowercase())
}

/// Position of the letter at index `j` of a word with `len` characters:
/// spread along the baseline at `50 × (len/2 − j)` pixels left of center.
pub fn letter_position(canvas: lexivid_core::Size2D, len: usize, j: usize) -> Point2D {
    let x = canvas.width / 2.0 - (len as f64 / 2.0 - j as f64) * LETTER_SPACING_PX;
    Point2D::new(x, canvas.height * TEXT_BASELINE_FRAC)
}

/// Start times of the extra audio plays for a total of `total_plays`:
/// `1 + k × audio_duration` for `k = 1..total_plays−1`. One play (the
/// default) or zero yields no extras.
pub fn repeat_offsets(total_plays: u32, audio_duration: lexivid_core::Duration) -> Vec<Timestamp> {
    (1..total_plays.max(1))
        .map(|k| {
            Timestamp::from_seconds(
                AUDIO_REPEAT_BASE_SECS + k as f64 * audio_duration.as_seconds(),
            )
        })
        .collect()
}

/// Plan one composition from a manifest record.
///
/// Layers are emitted bottom to top: background solid, logo, letters, main
/// image, main word, audio plays.
pub fn plan_composition(
    record: &ManifestRecord,
    assets: &ResolvedAssets,
    config: &GeneratorConfig,
) -> LexividResult<CompositionPlan> {
    let settings = CompositionSettings::from_config(&config.composition)?;
    let canvas = settings.canvas();
    let duration = settings.duration;
    let end = Timestamp::zero() + duration;

    let mut plan = CompositionPlan::new(
        composition_name(&record.word),
        settings,
        output_file_name(&record.word),
    );
    let background = plan.settings.background;

    // Background solid, pinned to the bottom of the stack by being first.
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("background"),
            LayerSource::Solid {
                color: background,
                size: canvas,
            },
        )
        .with_transform(Transform2D::identity().at(canvas.width / 2.0, canvas.height / 2.0))
        .with_span(Timestamp::zero(), end),
    );

    // Logo reveal: scaled to fit the canvas, fading out over a fixed window,
    // trimmed to its own intrinsic duration when it has one.
    let logo_scale = assets
        .logo
        .size
        .map(|size| canvas.fit_scale_percent(size))
        .unwrap_or(100.0);
    let logo_out = match assets.logo.duration {
        Some(d) if d < duration => Timestamp::zero() + d,
        _ => end,
    };
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("logo"),
            LayerSource::Image {
                path: assets.logo.path.clone(),
            },
        )
        .with_transform(
            Transform2D::identity()
                .at(canvas.width, canvas.height)
                .scaled(logo_scale),
        )
        .with_span(Timestamp::zero(), logo_out)
        .with_track(PropertyTrack::from_to(
            TrackProperty::Opacity,
            LOGO_FADE_START,
            100.0,
            LOGO_FADE_START + LOGO_FADE_SECS,
            0.0,
        )),
    );

    // Letter reveal: one single-character text layer per letter, each
    // scaling and fading in during its own one-second window.
    let letters: Vec<char> = record.word.chars().collect();
    for (j, letter) in letters.iter().enumerate() {
        let window_start = j as f64;
        let window_end = window_start + 1.0;
        plan.push_layer(
            LayerPlan::new(
                LayerId::new(format!("letter_{}", j)),
                LayerSource::Text {
                    text: letter.to_string(),
                    font_size: None,
                },
            )
            .with_transform(Transform2D {
                position: letter_position(canvas, letters.len(), j),
                ..Transform2D::identity().scaled(config.animation.initial_scale)
            })
            .with_span(Timestamp::zero(), Timestamp::from_seconds(LETTER_OUT_SECS))
            .with_track(PropertyTrack::from_to(
                TrackProperty::Opacity,
                window_start,
                0.0,
                window_end,
                100.0,
            ))
            .with_track(PropertyTrack::from_to(
                TrackProperty::ScaleX,
                window_start,
                config.animation.initial_scale,
                window_end,
                config.animation.final_scale,
            ))
            .with_track(PropertyTrack::from_to(
                TrackProperty::ScaleY,
                window_start,
                config.animation.initial_scale,
                window_end,
                config.animation.final_scale,
            )),
        );
    }

    // Main image: quarter-canvas offset, scaled to half-fit, fading in over
    // the first four seconds, present for the whole composition.
    let image_scale = assets
        .image
        .size
        .map(|size| canvas.fit_scale_percent(size) / 2.0)
        .unwrap_or(50.0);
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("image"),
            LayerSource::Image {
                path: assets.image.path.clone(),
            },
        )
        .with_transform(
            Transform2D::identity()
                .at(canvas.width / 4.0, canvas.height / 4.0)
                .scaled(image_scale),
        )
        .with_span(Timestamp::zero(), end)
        .with_track(PropertyTrack::from_to(
            TrackProperty::Opacity,
            0.0,
            0.0,
            IMAGE_FADE_END_SECS,
            100.0,
        )),
    );

    // Main word text: centered over the baseline with a top-center anchor,
    // delayed to the final third of the composition. The scale keyframe one
    // second before the end re-asserts 150% against later changes.
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("word"),
            LayerSource::Text {
                text: record.word.clone(),
                font_size: Some(WORD_FONT_SIZE),
            },
        )
        .with_transform(
            Transform2D::identity()
                .at(canvas.width / 2.0, canvas.height * TEXT_BASELINE_FRAC)
                .scaled(WORD_SCALE_PERCENT)
                .anchored(0.5, 0.0),
        )
        .with_span(Timestamp::from_seconds(WORD_START_SECS), end)
        .with_track(PropertyTrack::from_to(
            TrackProperty::Opacity,
            0.0,
            0.0,
            WORD_FADE_END_SECS,
            100.0,
        ))
        .with_track(PropertyTrack::pinned(
            TrackProperty::ScaleX,
            (duration.as_seconds() - 1.0).max(0.0),
            WORD_SCALE_PERCENT,
        ))
        .with_track(PropertyTrack::pinned(
            TrackProperty::ScaleY,
            (duration.as_seconds() - 1.0).max(0.0),
            WORD_SCALE_PERCENT,
        )),
    );

    // Main audio play.
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("audio"),
            LayerSource::Audio {
                path: assets.audio.path.clone(),
            },
        )
        .with_span(Timestamp::from_seconds(AUDIO_START_SECS), end),
    );

    // Extra plays of the same clip, spaced by its intrinsic duration.
    if config.animation.audio_repeats > 1 {
        let audio_duration = assets.audio.duration.ok_or_else(|| {
            LexividError::probe(
                "audio duration required for repeated plays but could not be probed",
                assets.audio.path.clone(),
            )
        })?;
        for (k, at) in repeat_offsets(config.animation.audio_repeats, audio_duration)
            .into_iter()
            .enumerate()
        {
            plan.push_layer(
                LayerPlan::new(
                    LayerId::new(format!("audio_repeat_{}", k + 1)),
                    LayerSource::Audio {
                        path: assets.audio.path.clone(),
                    },
                )
                .with_span(at, end),
            );
        }
    }

    // Unconditional second play near the end of the composition.
    plan.push_layer(
        LayerPlan::new(
            LayerId::new("audio_echo"),
            LayerSource::Audio {
                path: assets.audio.path.clone(),
            },
        )
        .with_span(Timestamp::from_seconds(AUDIO_ECHO_START_SECS), end),
    );

    Ok(plan)
}
