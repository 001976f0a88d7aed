//! Dataset-profile record kinds.

pub mod dataset_package;

pub use dataset_package::{
    ConfidentialityLevelType, DatasetAvailabilityType, DatasetPackage, DatasetPackageBuilder,
    DatasetType, DATASET_FIELDS,
};
