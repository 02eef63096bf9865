//! Core types for the Loam cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Loam crate: the dense
//! [`StateId`], the renderer-facing [`Rgb`] colour, and the single
//! fatal fault class [`ConfigError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod id;

pub use color::Rgb;
pub use error::ConfigError;
pub use id::StateId;
