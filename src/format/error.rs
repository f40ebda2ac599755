use derive_more::{Display, Error};

use crate::util::panic::Panic;

/// Two map keys of a kind with no defined ordering were compared, so the map can't be rendered
/// reproducibly.
#[derive(Debug, Display, Error)]
#[display("attempted to compare an unsupported key type: {value} of type {type_name}")]
pub struct UnsupportedKeyPanic {
    pub value: String,
    pub type_name: String,
}

impl Panic for UnsupportedKeyPanic {}
