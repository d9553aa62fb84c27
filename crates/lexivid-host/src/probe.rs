//! Asset resolution and probing.
//!
//! Resolves manifest paths against the session's project directory and
//! collects the intrinsic metadata the planner needs as pure inputs:
//! pixel dimensions for images, and (best-effort, via ffprobe) durations
//! for audio clips.

use std::path::Path;
use std::process::{Command, Stdio};

use lexivid_core::{Duration, LexividError, LexividResult};
use lexivid_plan::{AssetInfo, AssetKind, ManifestRecord, ResolvedAssets};

use crate::session::ProjectSession;

/// Check if ffprobe is available on the system.
pub fn ffprobe_available() -> bool {
    Command::new("ffprobe")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Best-effort duration probe via ffprobe. Returns None when ffprobe is
/// absent or its output cannot be interpreted; callers that require a
/// duration surface their own error.
fn ffprobe_duration(path: &Path) -> Option<Duration> {
    if !ffprobe_available() {
        return None;
    }

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
        ])
        .arg(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .ok()?;

    if !output.status.success() {
        tracing::debug!("ffprobe failed for {}", path.display());
        return None;
    }

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).ok()?;
    let seconds: f64 = json["format"]["duration"].as_str()?.parse().ok()?;
    Some(Duration::from_seconds(seconds))
}

/// Resolve one asset path against the session and probe its metadata.
///
/// Fails with `AssetMissing` when the file does not exist — the only
/// record-level recoverable failure — and `Probe` when an image exists
/// but its dimensions cannot be read.
pub fn resolve_asset(
    session: &ProjectSession,
    path: &Path,
    kind: AssetKind,
) -> LexividResult<AssetInfo> {
    let resolved = session.resolve(path);
    if !resolved.is_file() {
        return Err(LexividError::asset_missing(
            format!("{} file not found", kind),
            resolved,
        ));
    }

    match kind {
        AssetKind::Image => {
            let (width, height) = image::image_dimensions(&resolved)
                .map_err(|e| LexividError::probe(format!("unreadable image: {}", e), &resolved))?;
            Ok(AssetInfo::new(resolved, kind).with_size(width as f64, height as f64))
        }
        AssetKind::Audio => {
            let mut info = AssetInfo::new(resolved.clone(), kind);
            if let Some(duration) = ffprobe_duration(&resolved) {
                info = info.with_duration(duration);
            }
            Ok(info)
        }
    }
}

/// Resolve and probe both of a record's own assets, pairing them with the
/// already-resolved logo.
pub fn resolve_record_assets(
    session: &ProjectSession,
    record: &ManifestRecord,
    logo: &AssetInfo,
) -> LexividResult<ResolvedAssets> {
    let image = resolve_asset(session, &record.image, AssetKind::Image)?;
    let audio = resolve_asset(session, &record.audio, AssetKind::Audio)?;
    Ok(ResolvedAssets {
        image,
        audio,
        logo: logo.clone(),
    })
}
