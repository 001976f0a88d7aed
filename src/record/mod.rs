//! The validated-record construction mechanism.
//!
//! Every record kind in [`model`](crate::model) is built on the same three
//! pieces: a static table of [`FieldSpec`]s (own fields appended to the
//! inherited ones), a [`Value`] encoding of the constructor's full argument
//! set, and [`validate_fields`], which checks every value's shape against
//! its declared [`TypeDescriptor`] before anything is committed.

pub mod field_spec;
pub mod type_descriptor;
pub mod validator;
pub mod value;

pub use field_spec::{compose_field_specs, FieldSpec, RecordKind};
pub use type_descriptor::{EnumDescriptor, ModelEnum, TypeDescriptor};
pub use validator::{validate_fields, RecordInstance};
pub use value::{FieldMap, ToValue, Value};

/// Wire a model enumeration into the mechanism: a static [`EnumDescriptor`]
/// over strum's variant-name table, plus the [`ModelEnum`] and [`ToValue`]
/// impls the validator and builders rely on.
macro_rules! model_enum {
    ($name:ident, $descriptor:ident) => {
        pub static $descriptor: $crate::record::EnumDescriptor =
            $crate::record::EnumDescriptor {
                name: stringify!($name),
                variants: <$name as strum::VariantNames>::VARIANTS,
            };

        impl $crate::record::ModelEnum for $name {
            fn descriptor() -> &'static $crate::record::EnumDescriptor {
                &$descriptor
            }

            fn variant_name(&self) -> &'static str {
                self.into()
            }
        }

        impl $crate::record::ToValue for $name {
            fn to_value(&self) -> $crate::record::Value {
                $crate::record::Value::from_enum(*self)
            }
        }
    };
}

pub(crate) use model_enum;
