//! Core types and utilities for the tagstyle style extractor.
//!
//! This crate provides the foundational types used by `tagstyle-extract`:
//! - Scene-graph node types as read from a design document
//! - Value types (colors, paints, effects, keyword enums, units)
//! - The value formatting seam used to render sizes and colors
//! - Error types

pub mod errors;
pub mod format;
pub mod node;
pub mod paint;
pub mod types;

pub use errors::*;
pub use format::*;
pub use node::*;
pub use paint::*;
pub use types::*;
