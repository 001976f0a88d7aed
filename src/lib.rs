//! spdx3-model - typed, constructor-validated SPDX 3 data model records
//!
//! This library provides the record kinds of the SPDX 3 dataset and software
//! profiles (packages, dataset packages, dependency relationships) on top of
//! one shared validated-record construction mechanism.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Record mechanism** (`record`): field specifications, type
//!   descriptors, runtime values, and the validator every record kind is
//!   constructed through
//! - **Model** (`model`): the concrete record kinds, their enumerations,
//!   and the nested value objects they reference
//! - **Shared** (`shared`): common error types
//!
//! Every record kind declares its field table as "inherited tables + own
//! table", composed once with duplicate detection. Its builder normalizes
//! omitted collection arguments into fresh empty containers, encodes the
//! full argument set, and hands it to the validator, so an instance is
//! either fully validated or never observable.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use spdx3_model::prelude::*;
//!
//! # fn main() -> spdx3_model::shared::Result<()> {
//! let dataset = DatasetPackage::builder()
//!     .spdx_id("pkg1")
//!     .name("ImageNet")
//!     .originated_by(vec![])
//!     .download_location("https://example.org/d.zip")
//!     .primary_purpose(SoftwarePurpose::Data)
//!     .built_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!     .release_time(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
//!     .dataset_type(vec![DatasetType::Image])
//!     .build()?;
//!
//! assert_eq!(dataset.dataset_size(), None);
//! assert!(dataset.sensor().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod record;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::model::core::{
        CreationInfo, ExternalIdentifier, ExternalIdentifierType, ExternalReference,
        ExternalReferenceType, Hash, HashAlgorithm, LifecycleScopeType, RelationshipCompleteness,
        RelationshipType,
    };
    pub use crate::model::dataset::{
        ConfidentialityLevelType, DatasetAvailabilityType, DatasetPackage, DatasetPackageBuilder,
        DatasetType,
    };
    pub use crate::model::licensing::LicenseExpression;
    pub use crate::model::software::{
        DependencyConditionalityType, Package, PackageBuilder, SoftwareDependencyLinkType,
        SoftwareDependencyRelationship, SoftwareDependencyRelationshipBuilder, SoftwarePurpose,
    };
    pub use crate::record::{FieldMap, RecordInstance, RecordKind, ToValue, Value};
    pub use crate::shared::{ModelError, Result};
}
