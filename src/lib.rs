//! This crate is my collection of the utilities I keep finding missing from Rust's standard
//! library, the largest of which is a deterministic formatter for arbitrary values.
//!
//! # Purpose
//! [`Debug`](std::fmt::Debug) output is great for a quick look at a value, but it isn't stable: a
//! [`HashMap`](std::collections::HashMap) prints its entries in whatever order it happens to store
//! them, and nested values have no idea how deeply they're indented. That makes it useless for
//! comparing output in tests, or for logging something a human will diff later. The [`format`]
//! module fixes that by rendering any value in a canonical form, with sorted map keys, consistent
//! indentation and a type annotation on every composite.
//!
//! The [`strings`] and [`composite`] modules are smaller helpers that I wrote alongside it: naming
//! convention conversions for code generation, and a few shallow operations on sequences and maps
//! (including ordinal indexing, where `-1` is the last item).
//!
//! # Method
//! Rust has no runtime reflection, so the formatter relies on types describing themselves through
//! the [`Reflect`](format::Reflect) trait. It's implemented for the primitives, strings, the
//! common smart pointers and the standard collections, and is easy to implement for your own types
//! using [`Record`](format::Record).
//!
//! # Error Handling
//! Most of this crate can't fail. Where it can, functions come in pairs: a `try_` version that
//! returns a strongly typed error enum and a plain version that panics with that error's message.
//! Some failures (such as asking the formatter to sort map keys that have no ordering) are
//! programming defects rather than recoverable conditions, so they always panic.
//!
//! # Dependencies
//! Errors use `derive_more`, because it removes the need for some very repetitive programming.
//! Diagnostics are emitted through `tracing`, so they cost nothing unless a subscriber is
//! installed. Channels from `crossbeam` can be formatted when the `channel` feature is enabled.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "composite")]
pub mod composite;
#[cfg(feature = "format")]
pub mod format;
#[cfg(feature = "strings")]
pub mod strings;

pub(crate) mod util;
