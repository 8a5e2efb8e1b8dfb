//! Core data model shared by every schedario crate: features as loaded from
//! disk, the value normalizer, and dataset/record identities.

pub mod dataset;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod value;

pub use dataset::{DatasetKey, RecordId};
pub use error::{Error, Result};
pub use feature::{Feature, FeatureCollection, PropertyMap};
pub use geometry::{Geometry, GeometrySummary};
pub use value::{PropertyValue, is_empty, normalize, normalize_str};
