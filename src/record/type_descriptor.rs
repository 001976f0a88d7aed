use std::fmt;

/// The closed set of variant names of one model enumeration.
///
/// Declared once per enumeration as a `static` so field tables can embed a
/// `'static` reference to it.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl EnumDescriptor {
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(&variant)
    }
}

/// Declared type of a record field, interpreted by the recursive checker
/// in [`validator`](crate::record::validator).
///
/// Top-level optionality of a field is carried by
/// [`FieldSpec::required`](crate::record::FieldSpec); `Optional` exists for
/// nested positions, such as the value side of a mapping.
#[derive(Debug, Clone, Copy)]
pub enum TypeDescriptor {
    String,
    Integer,
    Boolean,
    DateTime,
    Enum(&'static EnumDescriptor),
    /// A nested record kind, checked by its kind tag.
    Record(&'static str),
    Optional(&'static TypeDescriptor),
    List(&'static TypeDescriptor),
    Map {
        key: &'static TypeDescriptor,
        value: &'static TypeDescriptor,
    },
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Integer => write!(f, "integer"),
            TypeDescriptor::Boolean => write!(f, "boolean"),
            TypeDescriptor::DateTime => write!(f, "datetime"),
            TypeDescriptor::Enum(descriptor) => write!(f, "enum {}", descriptor.name),
            TypeDescriptor::Record(kind) => write!(f, "record {}", kind),
            TypeDescriptor::Optional(inner) => write!(f, "optional {}", inner),
            TypeDescriptor::List(element) => write!(f, "list of {}", element),
            TypeDescriptor::Map { key, value } => write!(f, "map of {} to {}", key, value),
        }
    }
}

/// A model enumeration usable as a field type.
///
/// Implemented for every enum in [`model`](crate::model) via the
/// `model_enum!` macro, which derives the descriptor from strum's
/// variant-name table.
pub trait ModelEnum: Copy {
    fn descriptor() -> &'static EnumDescriptor;
    fn variant_name(&self) -> &'static str;
}
