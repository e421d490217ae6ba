//! Shape-from-silhouette voxel carving.
//!
//! Reconstructs an approximate solid from three binary orthographic
//! silhouettes (front, side, top) by intersecting their back-projections
//! over a discretized bounding box. The result is the visual hull of the
//! three views: the largest solid consistent with all silhouettes.
//!
//! # Example
//!
//! ```
//! use carver::{carve, BoundingBox, CarveConfig, ViewMask, ViewMasks};
//! use glam::Vec3;
//!
//! let config = CarveConfig::new(
//!     BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
//!     16,
//! ).unwrap();
//! let masks = ViewMasks {
//!     front: ViewMask::filled(8, 8),
//!     side: ViewMask::filled(8, 8),
//!     top: ViewMask::filled(8, 8),
//! };
//!
//! // All-foreground silhouettes carve nothing away.
//! let volume = carve(&config, &masks).unwrap();
//! assert_eq!(volume.occupied_count(), 16 * 16 * 16);
//! ```

pub mod carve;
pub mod core;
pub mod error;
pub mod grid;
pub mod mask;
pub mod project;
pub mod volume;

pub use crate::carve::{carve, carve_with, CarveOpts};
pub use crate::core::{Axis, BoundingBox, CarveConfig};
pub use crate::error::CarveError;
pub use crate::grid::SampleGrid;
pub use crate::mask::{ViewMask, ViewMasks};
pub use crate::project::ViewProjection;
pub use crate::volume::OccupancyVolume;
