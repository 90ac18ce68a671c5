use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to a configurable handler (payment method, promotion action,
/// shipping calculator, fulfillment handler, ...).
///
/// The handler's behavior lives elsewhere; configuration only names it and
/// carries its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerRef {
    /// Unique handler code, e.g. `manual-fulfillment`
    pub code: String,

    /// Handler arguments, passed through untouched
    #[serde(default)]
    pub args: BTreeMap<String, serde_json::Value>,
}

impl HandlerRef {
    /// Handler with no arguments.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            args: BTreeMap::new(),
        }
    }

    /// Add an argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }
}

/// Build a handler list from codes.
pub fn handlers(codes: &[&str]) -> Vec<HandlerRef> {
    codes.iter().copied().map(HandlerRef::new).collect()
}
