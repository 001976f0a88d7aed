use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::core::{
    CreationInfo, ExternalIdentifier, ExternalReference, Hash, ELEMENT_FIELDS,
};
use crate::model::licensing::LicenseExpression;
use crate::model::software::software_purpose::{SoftwarePurpose, SOFTWARE_PURPOSE};
use crate::record::{
    compose_field_specs, validate_fields, validator::require, FieldMap, FieldSpec, RecordKind,
    ToValue, TypeDescriptor,
};
use crate::shared::Result;

/// Fields the package kind adds to the element base.
///
/// Artifact- and software-artifact-level fields are folded in here rather
/// than kept as separate intermediate kinds, since no other kind in this
/// crate branches off between them.
pub static PACKAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", TypeDescriptor::String),
    FieldSpec::required("originated_by", TypeDescriptor::List(&TypeDescriptor::String)),
    FieldSpec::optional("supplied_by", TypeDescriptor::List(&TypeDescriptor::String)),
    FieldSpec::required("built_time", TypeDescriptor::DateTime),
    FieldSpec::required("release_time", TypeDescriptor::DateTime),
    FieldSpec::optional("valid_until_time", TypeDescriptor::DateTime),
    FieldSpec::optional("standard", TypeDescriptor::List(&TypeDescriptor::String)),
    FieldSpec::optional("content_identifier", TypeDescriptor::String),
    FieldSpec::required("primary_purpose", TypeDescriptor::Enum(&SOFTWARE_PURPOSE)),
    FieldSpec::optional(
        "additional_purpose",
        TypeDescriptor::List(&TypeDescriptor::Enum(&SOFTWARE_PURPOSE)),
    ),
    FieldSpec::optional("concluded_license", TypeDescriptor::String),
    FieldSpec::optional("declared_license", TypeDescriptor::String),
    FieldSpec::optional("copyright_text", TypeDescriptor::String),
    FieldSpec::optional("attribution_text", TypeDescriptor::String),
    FieldSpec::optional("package_version", TypeDescriptor::String),
    FieldSpec::required("download_location", TypeDescriptor::String),
    FieldSpec::optional("package_url", TypeDescriptor::String),
    FieldSpec::optional("homepage", TypeDescriptor::String),
    FieldSpec::optional("source_info", TypeDescriptor::String),
];

static COMPOSED_FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    compose_field_specs(Package::KIND, &[ELEMENT_FIELDS, PACKAGE_FIELDS])
        .unwrap_or_else(|err| panic!("{err}"))
});

/// A software package artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
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
}

impl RecordKind for Package {
    const KIND: &'static str = "Package";

    fn field_specs() -> &'static [FieldSpec] {
        COMPOSED_FIELDS.as_slice()
    }
}

impl Package {
    pub fn builder() -> PackageBuilder {
        PackageBuilder::default()
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
}

/// Builder for [`Package`]; one setter per declared field.
#[derive(Debug, Default)]
pub struct PackageBuilder {
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
}

impl PackageBuilder {
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
        supplied
    }

    pub fn build(self) -> Result<Package> {
        let mut builder = self;
        // Absent optional collection arguments become fresh containers owned
        // by this instance, never a default shared across calls.
        builder.verified_using.get_or_insert_with(Vec::new);
        builder.external_reference.get_or_insert_with(Vec::new);
        builder.external_identifier.get_or_insert_with(Vec::new);
        builder.supplied_by.get_or_insert_with(Vec::new);
        builder.standard.get_or_insert_with(Vec::new);
        builder.additional_purpose.get_or_insert_with(Vec::new);

        let supplied = builder.to_field_map();
        validate_fields(Package::KIND, Package::field_specs(), &supplied)?;

        Ok(Package {
            spdx_id: require(Package::KIND, "spdx_id", builder.spdx_id)?,
            creation_info: builder.creation_info,
            summary: builder.summary,
            description: builder.description,
            comment: builder.comment,
            verified_using: builder.verified_using.unwrap_or_default(),
            external_reference: builder.external_reference.unwrap_or_default(),
            external_identifier: builder.external_identifier.unwrap_or_default(),
            extension: builder.extension,
            name: require(Package::KIND, "name", builder.name)?,
            originated_by: require(Package::KIND, "originated_by", builder.originated_by)?,
            supplied_by: builder.supplied_by.unwrap_or_default(),
            built_time: require(Package::KIND, "built_time", builder.built_time)?,
            release_time: require(Package::KIND, "release_time", builder.release_time)?,
            valid_until_time: builder.valid_until_time,
            standard: builder.standard.unwrap_or_default(),
            content_identifier: builder.content_identifier,
            primary_purpose: require(Package::KIND, "primary_purpose", builder.primary_purpose)?,
            additional_purpose: builder.additional_purpose.unwrap_or_default(),
            concluded_license: builder.concluded_license,
            declared_license: builder.declared_license,
            copyright_text: builder.copyright_text,
            attribution_text: builder.attribution_text,
            package_version: builder.package_version,
            download_location: require(
                Package::KIND,
                "download_location",
                builder.download_location,
            )?,
            package_url: builder.package_url,
            homepage: builder.homepage,
            source_info: builder.source_info,
        })
    }
}
