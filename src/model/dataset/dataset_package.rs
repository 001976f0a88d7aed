use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::core::{
    CreationInfo, ExternalIdentifier, ExternalReference, Hash, ELEMENT_FIELDS,
};
use crate::model::licensing::LicenseExpression;
use crate::model::software::package::PACKAGE_FIELDS;
use crate::model::software::software_purpose::SoftwarePurpose;
use crate::record::{
    compose_field_specs, model_enum, validate_fields, validator::require, FieldMap, FieldSpec,
    RecordKind, ToValue, TypeDescriptor,
};
use crate::shared::{ModelError, Result};

/// Kind of content a dataset holds.
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
pub enum DatasetType {
    Structured,
    Numeric,
    Text,
    Categorical,
    Graph,
    Timeseries,
    Timestamp,
    Sensor,
    Image,
    Syntactic,
    Audio,
    Video,
    Other,
    NoAssertion,
}

model_enum!(DatasetType, DATASET_TYPE);

/// TLP-style confidentiality marking of a dataset.
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
pub enum ConfidentialityLevelType {
    Red,
    Amber,
    Green,
    Clear,
}

model_enum!(ConfidentialityLevelType, CONFIDENTIALITY_LEVEL_TYPE);

/// How the dataset can be obtained.
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
pub enum DatasetAvailabilityType {
    Clickthrough,
    DirectDownload,
    Query,
    Registration,
    ScrapingScript,
}

model_enum!(DatasetAvailabilityType, DATASET_AVAILABILITY_TYPE);

/// Fields the dataset kind adds to the package base.
pub static DATASET_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "dataset_type",
        TypeDescriptor::List(&TypeDescriptor::Enum(&DATASET_TYPE)),
    ),
    FieldSpec::optional("data_collection_process", TypeDescriptor::String),
    FieldSpec::optional("intended_use", TypeDescriptor::String),
    FieldSpec::optional("dataset_size", TypeDescriptor::Integer),
    FieldSpec::optional("dataset_noise", TypeDescriptor::String),
    FieldSpec::optional(
        "data_preprocessing",
        TypeDescriptor::List(&TypeDescriptor::String),
    ),
    FieldSpec::optional(
        "sensor",
        TypeDescriptor::Map {
            key: &TypeDescriptor::String,
            value: &TypeDescriptor::Optional(&TypeDescriptor::String),
        },
    ),
    FieldSpec::optional("known_bias", TypeDescriptor::List(&TypeDescriptor::String)),
    FieldSpec::optional(
        "has_sensitive_personal_information",
        TypeDescriptor::Boolean,
    ),
    FieldSpec::optional(
        "anonymization_method_used",
        TypeDescriptor::List(&TypeDescriptor::String),
    ),
    FieldSpec::optional(
        "confidentiality_level",
        TypeDescriptor::Enum(&CONFIDENTIALITY_LEVEL_TYPE),
    ),
    FieldSpec::optional("dataset_update_mechanism", TypeDescriptor::String),
    FieldSpec::optional(
        "dataset_availability",
        TypeDescriptor::Enum(&DATASET_AVAILABILITY_TYPE),
    ),
];

static COMPOSED_FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    compose_field_specs(
        DatasetPackage::KIND,
        &[ELEMENT_FIELDS, PACKAGE_FIELDS, DATASET_FIELDS],
    )
    .unwrap_or_else(|err| panic!("{err}"))
});

/// A package whose artifact is a dataset, with the provenance and handling
/// fields datasets need on top of the plain package ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetPackage {
    spdx_id: String,
    creation_info: Option<CreationInfo>,
    summary: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    verified_using: Vec<Hash>,
    external_reference: Vec<ExternalReference>,
    external_identifier: Vec<ExternalIdentifier>,
    extension: Option<String>,
    name: String,
    originated_by: Vec<String>,
    supplied_by: Vec<String>,
    built_time: DateTime<Utc>,
    release_time: DateTime<Utc>,
    valid_until_time: Option<DateTime<Utc>>,
    standard: Vec<String>,
    content_identifier: Option<String>,
    primary_purpose: SoftwarePurpose,
    additional_purpose: Vec<SoftwarePurpose>,
    concluded_license: Option<LicenseExpression>,
    declared_license: Option<LicenseExpression>,
    copyright_text: Option<String>,
    attribution_text: Option<String>,
    package_version: Option<String>,
    download_location: String,
    package_url: Option<String>,
    homepage: Option<String>,
    source_info: Option<String>,
    dataset_type: Vec<DatasetType>,
    data_collection_process: Option<String>,
    intended_use: Option<String>,
    dataset_size: Option<i64>,
    dataset_noise: Option<String>,
    data_preprocessing: Vec<String>,
    sensor: BTreeMap<String, Option<String>>,
    known_bias: Vec<String>,
    has_sensitive_personal_information: Option<bool>,
    anonymization_method_used: Vec<String>,
    confidentiality_level: Option<ConfidentialityLevelType>,
    dataset_update_mechanism: Option<String>,
    dataset_availability: Option<DatasetAvailabilityType>,
}

impl RecordKind for DatasetPackage {
    const KIND: &'static str = "DatasetPackage";

    fn field_specs() -> &'static [FieldSpec] {
        COMPOSED_FIELDS.as_slice()
    }
}

impl DatasetPackage {
    pub fn builder() -> DatasetPackageBuilder {
        DatasetPackageBuilder::default()
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn creation_info(&self) -> Option<&CreationInfo> {
        self.creation_info.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn verified_using(&self) -> &[Hash] {
        &self.verified_using
    }

    pub fn external_reference(&self) -> &[ExternalReference] {
        &self.external_reference
    }

    pub fn external_identifier(&self) -> &[ExternalIdentifier] {
        &self.external_identifier
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn originated_by(&self) -> &[String] {
        &self.originated_by
    }

    pub fn supplied_by(&self) -> &[String] {
        &self.supplied_by
    }

    pub fn built_time(&self) -> DateTime<Utc> {
        self.built_time
    }

    pub fn release_time(&self) -> DateTime<Utc> {
        self.release_time
    }

    pub fn valid_until_time(&self) -> Option<DateTime<Utc>> {
        self.valid_until_time
    }

    pub fn standard(&self) -> &[String] {
        &self.standard
    }

    pub fn content_identifier(&self) -> Option<&str> {
        self.content_identifier.as_deref()
    }

    pub fn primary_purpose(&self) -> SoftwarePurpose {
        self.primary_purpose
    }

    pub fn additional_purpose(&self) -> &[SoftwarePurpose] {
        &self.additional_purpose
    }

    pub fn concluded_license(&self) -> Option<&LicenseExpression> {
        self.concluded_license.as_ref()
    }

    pub fn declared_license(&self) -> Option<&LicenseExpression> {
        self.declared_license.as_ref()
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.copyright_text.as_deref()
    }

    pub fn attribution_text(&self) -> Option<&str> {
        self.attribution_text.as_deref()
    }

    pub fn package_version(&self) -> Option<&str> {
        self.package_version.as_deref()
    }

    pub fn download_location(&self) -> &str {
        &self.download_location
    }

    pub fn package_url(&self) -> Option<&str> {
        self.package_url.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn source_info(&self) -> Option<&str> {
        self.source_info.as_deref()
    }

    pub fn dataset_type(&self) -> &[DatasetType] {
        &self.dataset_type
    }

    pub fn data_collection_process(&self) -> Option<&str> {
        self.data_collection_process.as_deref()
    }

    pub fn intended_use(&self) -> Option<&str> {
        self.intended_use.as_deref()
    }

    pub fn dataset_size(&self) -> Option<i64> {
        self.dataset_size
    }

    pub fn dataset_noise(&self) -> Option<&str> {
        self.dataset_noise.as_deref()
    }

    pub fn data_preprocessing(&self) -> &[String] {
        &self.data_preprocessing
    }

    pub fn sensor(&self) -> &BTreeMap<String, Option<String>> {
        &self.sensor
    }

    pub fn known_bias(&self) -> &[String] {
        &self.known_bias
    }

    pub fn has_sensitive_personal_information(&self) -> Option<bool> {
        self.has_sensitive_personal_information
    }

    pub fn anonymization_method_used(&self) -> &[String] {
        &self.anonymization_method_used
    }

    pub fn confidentiality_level(&self) -> Option<ConfidentialityLevelType> {
        self.confidentiality_level
    }

    pub fn dataset_update_mechanism(&self) -> Option<&str> {
        self.dataset_update_mechanism.as_deref()
    }

    pub fn dataset_availability(&self) -> Option<DatasetAvailabilityType> {
        self.dataset_availability
    }
}

/// Builder for [`DatasetPackage`]; one setter per declared field, own and
/// inherited.
#[derive(Debug, Default)]
pub struct DatasetPackageBuilder {
    spdx_id: Option<String>,
    creation_info: Option<CreationInfo>,
    summary: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    verified_using: Option<Vec<Hash>>,
    external_reference: Option<Vec<ExternalReference>>,
    external_identifier: Option<Vec<ExternalIdentifier>>,
    extension: Option<String>,
    name: Option<String>,
    originated_by: Option<Vec<String>>,
    supplied_by: Option<Vec<String>>,
    built_time: Option<DateTime<Utc>>,
    release_time: Option<DateTime<Utc>>,
    valid_until_time: Option<DateTime<Utc>>,
    standard: Option<Vec<String>>,
    content_identifier: Option<String>,
    primary_purpose: Option<SoftwarePurpose>,
    additional_purpose: Option<Vec<SoftwarePurpose>>,
    concluded_license: Option<LicenseExpression>,
    declared_license: Option<LicenseExpression>,
    copyright_text: Option<String>,
    attribution_text: Option<String>,
    package_version: Option<String>,
    download_location: Option<String>,
    package_url: Option<String>,
    homepage: Option<String>,
    source_info: Option<String>,
    dataset_type: Option<Vec<DatasetType>>,
    data_collection_process: Option<String>,
    intended_use: Option<String>,
    dataset_size: Option<i64>,
    dataset_noise: Option<String>,
    data_preprocessing: Option<Vec<String>>,
    sensor: Option<BTreeMap<String, Option<String>>>,
    known_bias: Option<Vec<String>>,
    has_sensitive_personal_information: Option<bool>,
    anonymization_method_used: Option<Vec<String>>,
    confidentiality_level: Option<ConfidentialityLevelType>,
    dataset_update_mechanism: Option<String>,
    dataset_availability: Option<DatasetAvailabilityType>,
}

impl DatasetPackageBuilder {
    pub fn spdx_id(mut self, spdx_id: impl Into<String>) -> Self {
        self.spdx_id = Some(spdx_id.into());
        self
    }

    pub fn creation_info(mut self, creation_info: CreationInfo) -> Self {
        self.creation_info = Some(creation_info);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn verified_using(mut self, verified_using: Vec<Hash>) -> Self {
        self.verified_using = Some(verified_using);
        self
    }

    pub fn external_reference(mut self, external_reference: Vec<ExternalReference>) -> Self {
        self.external_reference = Some(external_reference);
        self
    }

    pub fn external_identifier(mut self, external_identifier: Vec<ExternalIdentifier>) -> Self {
        self.external_identifier = Some(external_identifier);
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn originated_by(mut self, originated_by: Vec<String>) -> Self {
        self.originated_by = Some(originated_by);
        self
    }

    pub fn supplied_by(mut self, supplied_by: Vec<String>) -> Self {
        self.supplied_by = Some(supplied_by);
        self
    }

    pub fn built_time(mut self, built_time: DateTime<Utc>) -> Self {
        self.built_time = Some(built_time);
        self
    }

    pub fn release_time(mut self, release_time: DateTime<Utc>) -> Self {
        self.release_time = Some(release_time);
        self
    }

    pub fn valid_until_time(mut self, valid_until_time: DateTime<Utc>) -> Self {
        self.valid_until_time = Some(valid_until_time);
        self
    }

    pub fn standard(mut self, standard: Vec<String>) -> Self {
        self.standard = Some(standard);
        self
    }

    pub fn content_identifier(mut self, content_identifier: impl Into<String>) -> Self {
        self.content_identifier = Some(content_identifier.into());
        self
    }

    pub fn primary_purpose(mut self, primary_purpose: SoftwarePurpose) -> Self {
        self.primary_purpose = Some(primary_purpose);
        self
    }

    pub fn additional_purpose(mut self, additional_purpose: Vec<SoftwarePurpose>) -> Self {
        self.additional_purpose = Some(additional_purpose);
        self
    }

    pub fn concluded_license(mut self, concluded_license: LicenseExpression) -> Self {
        self.concluded_license = Some(concluded_license);
        self
    }

    pub fn declared_license(mut self, declared_license: LicenseExpression) -> Self {
        self.declared_license = Some(declared_license);
        self
    }

    pub fn copyright_text(mut self, copyright_text: impl Into<String>) -> Self {
        self.copyright_text = Some(copyright_text.into());
        self
    }

    pub fn attribution_text(mut self, attribution_text: impl Into<String>) -> Self {
        self.attribution_text = Some(attribution_text.into());
        self
    }

    pub fn package_version(mut self, package_version: impl Into<String>) -> Self {
        self.package_version = Some(package_version.into());
        self
    }

    pub fn download_location(mut self, download_location: impl Into<String>) -> Self {
        self.download_location = Some(download_location.into());
        self
    }

    pub fn package_url(mut self, package_url: impl Into<String>) -> Self {
        self.package_url = Some(package_url.into());
        self
    }

    pub fn homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    pub fn source_info(mut self, source_info: impl Into<String>) -> Self {
        self.source_info = Some(source_info.into());
        self
    }

    pub fn dataset_type(mut self, dataset_type: Vec<DatasetType>) -> Self {
        self.dataset_type = Some(dataset_type);
        self
    }

    pub fn data_collection_process(mut self, data_collection_process: impl Into<String>) -> Self {
        self.data_collection_process = Some(data_collection_process.into());
        self
    }

    pub fn intended_use(mut self, intended_use: impl Into<String>) -> Self {
        self.intended_use = Some(intended_use.into());
        self
    }

    pub fn dataset_size(mut self, dataset_size: i64) -> Self {
        self.dataset_size = Some(dataset_size);
        self
    }

    pub fn dataset_noise(mut self, dataset_noise: impl Into<String>) -> Self {
        self.dataset_noise = Some(dataset_noise.into());
        self
    }

    pub fn data_preprocessing(mut self, data_preprocessing: Vec<String>) -> Self {
        self.data_preprocessing = Some(data_preprocessing);
        self
    }

    pub fn sensor(mut self, sensor: BTreeMap<String, Option<String>>) -> Self {
        self.sensor = Some(sensor);
        self
    }

    pub fn known_bias(mut self, known_bias: Vec<String>) -> Self {
        self.known_bias = Some(known_bias);
        self
    }

    pub fn has_sensitive_personal_information(mut self, flag: bool) -> Self {
        self.has_sensitive_personal_information = Some(flag);
        self
    }

    pub fn anonymization_method_used(mut self, anonymization_method_used: Vec<String>) -> Self {
        self.anonymization_method_used = Some(anonymization_method_used);
        self
    }

    pub fn confidentiality_level(
        mut self,
        confidentiality_level: ConfidentialityLevelType,
    ) -> Self {
        self.confidentiality_level = Some(confidentiality_level);
        self
    }

    pub fn dataset_update_mechanism(mut self, dataset_update_mechanism: impl Into<String>) -> Self {
        self.dataset_update_mechanism = Some(dataset_update_mechanism.into());
        self
    }

    pub fn dataset_availability(mut self, dataset_availability: DatasetAvailabilityType) -> Self {
        self.dataset_availability = Some(dataset_availability);
        self
    }

    fn to_field_map(&self) -> FieldMap {
        let mut supplied = FieldMap::new();
        supplied.insert("spdx_id".to_string(), self.spdx_id.to_value());
        supplied.insert("creation_info".to_string(), self.creation_info.to_value());
        supplied.insert("summary".to_string(), self.summary.to_value());
        supplied.insert("description".to_string(), self.description.to_value());
        supplied.insert("comment".to_string(), self.comment.to_value());
        supplied.insert("verified_using".to_string(), self.verified_using.to_value());
        supplied.insert(
            "external_reference".to_string(),
            self.external_reference.to_value(),
        );
        supplied.insert(
            "external_identifier".to_string(),
            self.external_identifier.to_value(),
        );
        supplied.insert("extension".to_string(), self.extension.to_value());
        supplied.insert("name".to_string(), self.name.to_value());
        supplied.insert("originated_by".to_string(), self.originated_by.to_value());
        supplied.insert("supplied_by".to_string(), self.supplied_by.to_value());
        supplied.insert("built_time".to_string(), self.built_time.to_value());
        supplied.insert("release_time".to_string(), self.release_time.to_value());
        supplied.insert(
            "valid_until_time".to_string(),
            self.valid_until_time.to_value(),
        );
        supplied.insert("standard".to_string(), self.standard.to_value());
        supplied.insert(
            "content_identifier".to_string(),
            self.content_identifier.to_value(),
        );
        supplied.insert(
            "primary_purpose".to_string(),
            self.primary_purpose.to_value(),
        );
        supplied.insert(
            "additional_purpose".to_string(),
            self.additional_purpose.to_value(),
        );
        supplied.insert(
            "concluded_license".to_string(),
            self.concluded_license.to_value(),
        );
        supplied.insert(
            "declared_license".to_string(),
            self.declared_license.to_value(),
        );
        supplied.insert("copyright_text".to_string(), self.copyright_text.to_value());
        supplied.insert(
            "attribution_text".to_string(),
            self.attribution_text.to_value(),
        );
        supplied.insert(
            "package_version".to_string(),
            self.package_version.to_value(),
        );
        supplied.insert(
            "download_location".to_string(),
            self.download_location.to_value(),
        );
        supplied.insert("package_url".to_string(), self.package_url.to_value());
        supplied.insert("homepage".to_string(), self.homepage.to_value());
        supplied.insert("source_info".to_string(), self.source_info.to_value());
        supplied.insert("dataset_type".to_string(), self.dataset_type.to_value());
        supplied.insert(
            "data_collection_process".to_string(),
            self.data_collection_process.to_value(),
        );
        supplied.insert("intended_use".to_string(), self.intended_use.to_value());
        supplied.insert("dataset_size".to_string(), self.dataset_size.to_value());
        supplied.insert("dataset_noise".to_string(), self.dataset_noise.to_value());
        supplied.insert(
            "data_preprocessing".to_string(),
            self.data_preprocessing.to_value(),
        );
        supplied.insert("sensor".to_string(), self.sensor.to_value());
        supplied.insert("known_bias".to_string(), self.known_bias.to_value());
        supplied.insert(
            "has_sensitive_personal_information".to_string(),
            self.has_sensitive_personal_information.to_value(),
        );
        supplied.insert(
            "anonymization_method_used".to_string(),
            self.anonymization_method_used.to_value(),
        );
        supplied.insert(
            "confidentiality_level".to_string(),
            self.confidentiality_level.to_value(),
        );
        supplied.insert(
            "dataset_update_mechanism".to_string(),
            self.dataset_update_mechanism.to_value(),
        );
        supplied.insert(
            "dataset_availability".to_string(),
            self.dataset_availability.to_value(),
        );
        supplied
    }

    pub fn build(self) -> Result<DatasetPackage> {
        let mut builder = self;
        // Absent optional collection arguments become fresh containers owned
        // by this instance, never a default shared across calls.
        builder.verified_using.get_or_insert_with(Vec::new);
        builder.external_reference.get_or_insert_with(Vec::new);
        builder.external_identifier.get_or_insert_with(Vec::new);
        builder.supplied_by.get_or_insert_with(Vec::new);
        builder.standard.get_or_insert_with(Vec::new);
        builder.additional_purpose.get_or_insert_with(Vec::new);
        builder.data_preprocessing.get_or_insert_with(Vec::new);
        builder.sensor.get_or_insert_with(BTreeMap::new);
        builder.known_bias.get_or_insert_with(Vec::new);
        builder.anonymization_method_used.get_or_insert_with(Vec::new);

        let supplied = builder.to_field_map();
        validate_fields(DatasetPackage::KIND, DatasetPackage::field_specs(), &supplied)?;

        // Business rule layered above the generic type check.
        if let Some(size) = builder.dataset_size {
            if size < 0 {
                return Err(ModelError::validation(
                    DatasetPackage::KIND,
                    "dataset_size",
                    "must not be negative",
                ));
            }
        }

        let kind = DatasetPackage::KIND;
        Ok(DatasetPackage {
            spdx_id: require(kind, "spdx_id", builder.spdx_id)?,
            creation_info: builder.creation_info,
            summary: builder.summary,
            description: builder.description,
            comment: builder.comment,
            verified_using: builder.verified_using.unwrap_or_default(),
            external_reference: builder.external_reference.unwrap_or_default(),
            external_identifier: builder.external_identifier.unwrap_or_default(),
            extension: builder.extension,
            name: require(kind, "name", builder.name)?,
            originated_by: require(kind, "originated_by", builder.originated_by)?,
            supplied_by: builder.supplied_by.unwrap_or_default(),
            built_time: require(kind, "built_time", builder.built_time)?,
            release_time: require(kind, "release_time", builder.release_time)?,
            valid_until_time: builder.valid_until_time,
            standard: builder.standard.unwrap_or_default(),
            content_identifier: builder.content_identifier,
            primary_purpose: require(kind, "primary_purpose", builder.primary_purpose)?,
            additional_purpose: builder.additional_purpose.unwrap_or_default(),
            concluded_license: builder.concluded_license,
            declared_license: builder.declared_license,
            copyright_text: builder.copyright_text,
            attribution_text: builder.attribution_text,
            package_version: builder.package_version,
            download_location: require(kind, "download_location", builder.download_location)?,
            package_url: builder.package_url,
            homepage: builder.homepage,
            source_info: builder.source_info,
            dataset_type: require(kind, "dataset_type", builder.dataset_type)?,
            data_collection_process: builder.data_collection_process,
            intended_use: builder.intended_use,
            dataset_size: builder.dataset_size,
            dataset_noise: builder.dataset_noise,
            data_preprocessing: builder.data_preprocessing.unwrap_or_default(),
            sensor: builder.sensor.unwrap_or_default(),
            known_bias: builder.known_bias.unwrap_or_default(),
            has_sensitive_personal_information: builder.has_sensitive_personal_information,
            anonymization_method_used: builder.anonymization_method_used.unwrap_or_default(),
            confidentiality_level: builder.confidentiality_level,
            dataset_update_mechanism: builder.dataset_update_mechanism,
            dataset_availability: builder.dataset_availability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use chrono::TimeZone;

    fn create_test_builder() -> DatasetPackageBuilder {
        DatasetPackage::builder()
            .spdx_id("pkg1")
            .name("ImageNet")
            .originated_by(vec![])
            .download_location("https://example.org/d.zip")
            .primary_purpose(SoftwarePurpose::Data)
            .built_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .release_time(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
            .dataset_type(vec![DatasetType::Image])
    }

    #[test]
    fn test_dataset_package_minimal_construction() {
        let package = create_test_builder().build().unwrap();
        assert_eq!(package.spdx_id(), "pkg1");
        assert_eq!(package.name(), "ImageNet");
        assert_eq!(package.primary_purpose(), SoftwarePurpose::Data);
        assert_eq!(package.dataset_type(), &[DatasetType::Image]);
        assert_eq!(package.dataset_size(), None);
        assert!(package.sensor().is_empty());
        assert!(package.confidentiality_level().is_none());
    }

    #[test]
    fn test_dataset_package_round_trips_supplied_values() {
        let built = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut sensor = BTreeMap::new();
        sensor.insert("lidar".to_string(), Some("roof unit".to_string()));
        sensor.insert("radar".to_string(), None);

        let package = create_test_builder()
            .dataset_size(14_000_000)
            .sensor(sensor.clone())
            .known_bias(vec!["geographic skew".to_string()])
            .has_sensitive_personal_information(true)
            .confidentiality_level(ConfidentialityLevelType::Amber)
            .dataset_availability(DatasetAvailabilityType::DirectDownload)
            .build()
            .unwrap();

        assert_eq!(package.built_time(), built);
        assert_eq!(package.dataset_size(), Some(14_000_000));
        assert_eq!(package.sensor(), &sensor);
        assert_eq!(package.known_bias(), &["geographic skew".to_string()]);
        assert_eq!(package.has_sensitive_personal_information(), Some(true));
        assert_eq!(
            package.confidentiality_level(),
            Some(ConfidentialityLevelType::Amber)
        );
        assert_eq!(
            package.dataset_availability(),
            Some(DatasetAvailabilityType::DirectDownload)
        );
    }

    #[test]
    fn test_dataset_package_collections_are_per_instance() {
        let first = create_test_builder().build().unwrap();
        let second = create_test_builder()
            .data_preprocessing(vec!["resize to 224x224".to_string()])
            .build()
            .unwrap();
        // Each omitted collection is its own fresh container; filling one
        // instance's field leaves the other's untouched.
        assert!(first.data_preprocessing().is_empty());
        assert_eq!(second.data_preprocessing().len(), 1);
        assert!(first.sensor().is_empty());
        assert!(second.sensor().is_empty());
    }

    #[test]
    fn test_dataset_package_missing_dataset_type() {
        let error = DatasetPackage::builder()
            .spdx_id("pkg1")
            .name("ImageNet")
            .originated_by(vec![])
            .download_location("https://example.org/d.zip")
            .primary_purpose(SoftwarePurpose::Data)
            .built_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .release_time(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
            .build()
            .unwrap_err();
        match error {
            ModelError::MissingRequiredField { record_kind, field } => {
                assert_eq!(record_kind, "DatasetPackage");
                assert_eq!(field, "dataset_type");
            }
            other => panic!("expected missing required field error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_package_rejects_plain_string_confidentiality_level() {
        let mut supplied = create_test_builder().to_field_map();
        supplied.insert(
            "confidentiality_level".to_string(),
            Value::String("RED".to_string()),
        );
        let error = DatasetPackage::validate(&supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                field,
                expected,
                actual,
                ..
            } => {
                assert_eq!(field, "confidentiality_level");
                assert_eq!(expected, "enum ConfidentialityLevelType");
                assert_eq!(actual, "string");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_package_rejects_wrongly_typed_list_element() {
        let mut supplied = create_test_builder().to_field_map();
        supplied.insert(
            "known_bias".to_string(),
            Value::List(vec![
                Value::String("selection bias".to_string()),
                Value::Boolean(true),
            ]),
        );
        let error = DatasetPackage::validate(&supplied).unwrap_err();
        match error {
            ModelError::FieldType { field, actual, .. } => {
                assert_eq!(field, "known_bias");
                assert_eq!(actual, "list containing boolean");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_package_rejects_negative_size() {
        let error = create_test_builder().dataset_size(-1).build().unwrap_err();
        match error {
            ModelError::Validation { field, .. } => assert_eq!(field, "dataset_size"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_package_accepts_zero_size() {
        let package = create_test_builder().dataset_size(0).build().unwrap();
        assert_eq!(package.dataset_size(), Some(0));
    }

    #[test]
    fn test_dataset_package_empty_dataset_type_list_passes_type_check() {
        // The element type check is vacuous over an empty list; requiredness
        // only demands the field be supplied.
        let package = create_test_builder().dataset_type(vec![]).build().unwrap();
        assert!(package.dataset_type().is_empty());
    }

    #[test]
    fn test_dataset_package_validate_raw_map_reads_back() {
        let supplied = create_test_builder().to_field_map();
        let instance = DatasetPackage::validate(&supplied).unwrap();
        assert_eq!(instance.kind(), "DatasetPackage");
        assert_eq!(
            instance.get("spdx_id"),
            Some(&Value::String("pkg1".to_string()))
        );
        assert!(!instance.is_set("dataset_size"));
    }

    #[test]
    fn test_dataset_package_serializes_camel_case() {
        let package = create_test_builder()
            .confidentiality_level(ConfidentialityLevelType::Red)
            .build()
            .unwrap();
        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["datasetType"][0], "image");
        assert_eq!(json["confidentialityLevel"], "red");
        assert_eq!(json["hasSensitivePersonalInformation"], serde_json::Value::Null);
    }

    #[test]
    fn test_dataset_field_specs_compose_without_duplicates() {
        let specs = DatasetPackage::field_specs();
        let mut names: Vec<&str> = specs.iter().map(|spec| spec.name).collect();
        assert_eq!(names.first(), Some(&"spdx_id"));
        assert_eq!(names.last(), Some(&"dataset_availability"));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), specs.len());
    }
}
