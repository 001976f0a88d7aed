use serde::{Deserialize, Serialize};

use crate::record::model_enum;

/// Primary role a software artifact plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::VariantNames,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SoftwarePurpose {
    Application,
    Archive,
    Bom,
    Configuration,
    Container,
    Data,
    Device,
    DeviceDriver,
    DiskImage,
    Documentation,
    Evidence,
    Executable,
    File,
    FilesystemImage,
    Firmware,
    Framework,
    Install,
    Library,
    Manifest,
    Model,
    Module,
    OperatingSystem,
    Other,
    Patch,
    Platform,
    Requirement,
    Source,
    Specification,
    Test,
}

model_enum!(SoftwarePurpose, SOFTWARE_PURPOSE);
