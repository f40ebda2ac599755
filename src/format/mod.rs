//! A deterministic formatter for arbitrary values.
//!
//! [`format`] renders any type implementing [`Reflect`] into an indented, canonical string. It
//! exists because [`Debug`](std::fmt::Debug) output depends on the iteration order of hash-based
//! collections and knows nothing about the nesting depth it's printed at.
//!
//! # Method
//! Reflection is explicit. A type describes itself as a [`Value`], a closed set of variants that
//! mirrors the [`Category`] of each shape the formatter knows how to render. Static type
//! information comes from [`Typed`] and is rendered by the [`Display`](std::fmt::Display)
//! implementation of [`Type`]. Map keys are ordered by [`compare_keys`] before rendering.
//!
//! Types reached through a reference (a [`Box`], [`Rc`](std::rc::Rc), [`Option`], etc.) may
//! implement [`Renderable`] to be rendered as a sequence, an association list or a set of fields
//! instead.
//!
//! # Example
//! ```
//! # use std::collections::HashMap;
//! # use missing_utilities::format::format;
//! let map = HashMap::from([("two", 2), ("one", 1)]);
//! assert_eq!(format(&map), "[\n    \"one\": 1\n    \"two\": 2\n](map[String, i32])");
//! ```

mod category;
mod defined;
mod error;
mod reflect;
mod render;
mod scalar;
mod sort;
mod types;
mod value;

pub use category::*;
pub use defined::*;
pub use error::*;
pub use reflect::*;
pub use render::*;
pub use sort::*;
pub use types::*;
pub use value::*;

mod tests;
