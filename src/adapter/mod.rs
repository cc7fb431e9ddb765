//! Wire-format adaptation for STTM difference reports.
//!
//! Report producers change their JSON layout over time. Each supported layout
//! gets a [`FormatAdapter`] that can recognize it and pull out format-agnostic
//! [`RawTab`] records; the [`AdapterSelector`] picks the adapter for a given
//! document. Nothing downstream of the raw records knows which layout was read.

pub mod current;
pub mod fields;
pub mod legacy;
pub mod raw;
pub mod selector;

pub use current::CurrentFormatAdapter;
pub use legacy::LegacyFormatAdapter;
pub use raw::{RawMapping, RawTab};
pub use selector::AdapterSelector;

use serde_json::Value;

pub trait FormatAdapter: Send + Sync {
    /// Cheap structural check of the document's top-level shape.
    ///
    /// Must never panic on malformed input; anything unrecognized is `false`.
    fn validate(&self, document: &Value) -> bool;

    /// Pull raw tab records out of the document.
    ///
    /// Missing optional data is defaulted rather than reported as an error.
    fn extract(&self, document: &Value) -> Vec<RawTab>;

    /// Human-readable label for diagnostics
    fn format_version(&self) -> &str;
}
