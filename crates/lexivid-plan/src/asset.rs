use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use lexivid_core::{Duration, Size2D};

/// The kind of a resolved asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Image,
    Audio,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// A resolved, probed asset: an existing file plus whatever intrinsic
/// metadata the probe could determine. The planner consumes these as pure
/// inputs; it never touches the filesystem itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Absolute path the asset resolved to.
    pub path: PathBuf,
    pub kind: AssetKind,
    /// Pixel dimensions (images only).
    pub size: Option<Size2D>,
    /// Intrinsic duration, when the probe could determine one. Still images
    /// have none.
    pub duration: Option<Duration>,
}

impl AssetInfo {
    pub fn new(path: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            path: path.into(),
            kind,
            size: None,
            duration: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size2D::new(width, height));
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// The three assets every record needs before any layer is planned.
#[derive(Debug, Clone)]
pub struct ResolvedAssets {
    pub image: AssetInfo,
    pub audio: AssetInfo,
    pub logo: AssetInfo,
}
