use derive_more::{Display, IsVariant};

use crate::format::Value;

/// The closed set of shapes a [`Value`] can take for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum Category {
    Undefined,
    Boolean,
    UnsignedInteger,
    SignedInteger,
    Float,
    Complex,
    Character,
    Text,
    Sequence,
    AssociativeCollection,
    Record,
    Reference,
    PolymorphicWrapper,
    Executable,
    StreamChannel,
    Opaque,
}

impl Category {
    /// Returns true for categories rendered as a bracketed, indented body.
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Category::Sequence
                | Category::AssociativeCollection
                | Category::Record
                | Category::Reference
                | Category::StreamChannel
        )
    }

    /// Returns true for categories that can be ordered as map keys.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Category::Boolean
                | Category::UnsignedInteger
                | Category::SignedInteger
                | Category::Float
                | Category::Complex
                | Category::Character
                | Category::Text
        )
    }
}

/// Classifies the provided value into exactly one [`Category`].
pub const fn classify(value: &Value<'_>) -> Category {
    value.category()
}
