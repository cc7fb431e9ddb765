use super::current::CurrentFormatAdapter;
use super::legacy::LegacyFormatAdapter;
use super::FormatAdapter;
use serde_json::Value;
use tracing::{info, warn};

/// Ordered set of adapters; the first one whose `validate` accepts a document
/// handles it.
///
/// Registration is expected to happen once at startup. Later registrations
/// take priority over earlier ones and over the built-ins.
pub struct AdapterSelector {
    adapters: Vec<Box<dyn FormatAdapter>>,
    fallback: CurrentFormatAdapter,
}

impl Default for AdapterSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSelector {
    /// Selector with the built-in adapters, current format first
    pub fn new() -> Self {
        type AdapterFactory = fn() -> Box<dyn FormatAdapter>;

        static BUILT_IN_ADAPTERS: &[AdapterFactory] = &[
            || Box::new(CurrentFormatAdapter::new()),
            || Box::new(LegacyFormatAdapter::new()),
        ];

        Self {
            adapters: BUILT_IN_ADAPTERS.iter().map(|factory| factory()).collect(),
            fallback: CurrentFormatAdapter::new(),
        }
    }

    /// Selector with no adapters: every document goes to the fallback
    pub fn empty() -> Self {
        Self {
            adapters: Vec::new(),
            fallback: CurrentFormatAdapter::new(),
        }
    }

    /// Add an adapter ahead of every adapter already registered
    pub fn register(&mut self, adapter: Box<dyn FormatAdapter>) {
        self.adapters.insert(0, adapter);
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Format labels in selection order
    pub fn format_versions(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.format_version()).collect()
    }

    /// Pick the adapter for a document.
    ///
    /// Never fails: when nothing matches, the current-format adapter is used
    /// for a best-effort parse.
    pub fn select(&self, document: &Value) -> &dyn FormatAdapter {
        match self.adapters.iter().find(|adapter| adapter.validate(document)) {
            Some(adapter) => {
                info!("Using adapter for format: {}", adapter.format_version());
                &**adapter
            }
            None => {
                warn!(
                    "No specific adapter found, using {} adapter",
                    self.fallback.format_version()
                );
                &self.fallback
            }
        }
    }
}
