//! Entry point for turning an STTM difference report into a [`Document`].

use crate::adapter::{AdapterSelector, FormatAdapter};
use crate::converter::DomainConverter;
use crate::errors::{Error, Result};
use crate::model::Document;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Selects an adapter for each report, extracts raw tabs and converts them.
///
/// Each call works on its own data; a parser can be shared across threads
/// once adapter registration is done.
#[derive(Default)]
pub struct SttmParser {
    selector: AdapterSelector,
    converter: DomainConverter,
}

impl SttmParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(selector: AdapterSelector) -> Self {
        Self {
            selector,
            converter: DomainConverter::new(),
        }
    }

    /// Register an additional format; it is tried before all existing ones
    pub fn register_adapter(&mut self, adapter: Box<dyn FormatAdapter>) {
        self.selector.register(adapter);
    }

    pub fn selector(&self) -> &AdapterSelector {
        &self.selector
    }

    pub fn parse_value(&self, document: &Value) -> Result<Document> {
        if !document.is_object() {
            return Err(Error::NotAnObject {
                found: json_kind(document),
            });
        }

        let adapter = self.selector.select(document);
        let raw_tabs = adapter.extract(document);
        debug!(
            format = adapter.format_version(),
            "Extracted {} raw tabs",
            raw_tabs.len()
        );

        Ok(self.converter.convert(raw_tabs))
    }

    pub fn parse_str(&self, content: &str) -> Result<Document> {
        let document: Value = serde_json::from_str(content)?;
        self.parse_value(&document)
    }

    pub fn parse_file(&self, path: &Path) -> Result<Document> {
        info!("Parsing STTM file: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.parse_str(&content)
    }
}

/// Parse a report file with the built-in adapters
pub fn parse_sttm_file(path: &Path) -> Result<Document> {
    SttmParser::new().parse_file(path)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
