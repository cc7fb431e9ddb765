//! Domain model for parsed STTM difference reports.
//!
//! These types are the stable, format-independent representation consumed by
//! every downstream stage. They are built once by
//! [`DomainConverter`](crate::converter::DomainConverter) and only read
//! afterwards: a [`Document`] owns its [`Tab`]s and each tab owns its
//! [`Mapping`]s.

mod document;
mod mapping;
mod tab;

pub use document::{Document, DocumentSummary, TabsByChangeType};
pub use mapping::{ChangeType, FieldDiff, Mapping, ValueMap};
pub use tab::{Tab, TabChangeCategory};
