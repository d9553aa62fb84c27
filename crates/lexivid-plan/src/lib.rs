//! # lexivid-plan
//!
//! The declarative plan layer of lexivid: manifest records, keyframe tracks,
//! layer plans, and composition plans, plus the pure planner that derives a
//! complete `CompositionPlan` from one manifest record.
//!
//! Nothing in this crate performs I/O beyond loading the manifest file;
//! planning is data-in/data-out so it can be tested without any host.

pub mod animation;
pub mod asset;
pub mod composition;
pub mod layer;
pub mod manifest;
pub mod planner;
pub mod validate;

pub use animation::{Keyframe, PropertyTrack, TrackProperty};
pub use asset::{AssetInfo, AssetKind, ResolvedAssets};
pub use composition::{CompositionPlan, CompositionSettings};
pub use layer::{LayerId, LayerPlan, LayerSource};
pub use manifest::{Manifest, ManifestRecord};
pub use planner::{composition_name, output_file_name, plan_composition};
pub use validate::validate_plan;
