//! Argument lists for a single call

use crate::error::Result;
use crate::key::CallKey;
use crate::value::Value;

/// Positional and named arguments of one invocation
///
/// Named arguments keep the order they were supplied in; the call key
/// sorts them, the wrapped function sees them as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an argument list from positional values only
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument
    ///
    /// Supplying a name twice replaces the earlier value in place.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.named.push((name, value)),
        }
        self
    }

    /// Positional values in call order
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    /// Named values in supply order
    pub fn named_values(&self) -> &[(String, Value)] {
        &self.named
    }

    /// Look up a named argument
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Look up a positional argument
    pub fn at(&self, idx: usize) -> Option<&Value> {
        self.positional.get(idx)
    }

    /// Total number of arguments
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Derive the call key for these arguments
    pub fn key(&self) -> Result<CallKey> {
        CallKey::from_args(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let args = Args::new().arg(2).arg("x").kwarg("flag", true);

        assert_eq!(args.len(), 3);
        assert_eq!(args.at(0), Some(&Value::Int(2)));
        assert_eq!(args.at(1), Some(&Value::Str("x".to_string())));
        assert_eq!(args.get("flag"), Some(&Value::Bool(true)));
        assert_eq!(args.get("missing"), None);
    }

    #[test]
    fn test_named_keeps_supply_order() {
        let args = Args::new().kwarg("b", 1).kwarg("a", 2);
        let names: Vec<_> = args.named_values().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let args = Args::new().kwarg("a", 1).kwarg("b", 2).kwarg("a", 3);

        assert_eq!(args.named_values().len(), 2);
        assert_eq!(args.get("a"), Some(&Value::Int(3)));
        assert_eq!(args.named_values()[0].0, "a");
    }

    #[test]
    fn test_empty() {
        assert!(Args::new().is_empty());
        assert!(!Args::positional([1]).is_empty());
    }
}
