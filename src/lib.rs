// Export modules for library usage
pub mod adapter;
pub mod cli;
pub mod commands;
pub mod config;
pub mod converter;
pub mod errors;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use crate::model::{
    ChangeType, Document, DocumentSummary, FieldDiff, Mapping, Tab, TabChangeCategory,
    TabsByChangeType, ValueMap,
};

pub use crate::adapter::{
    AdapterSelector, CurrentFormatAdapter, FormatAdapter, LegacyFormatAdapter, RawMapping, RawTab,
};

pub use crate::converter::DomainConverter;

pub use crate::parser::{parse_sttm_file, SttmParser};

pub use crate::errors::{Error, Result};

pub use crate::config::{load_config, PresetLevel, SttmConfig};
