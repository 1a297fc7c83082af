//! Query parameter types

/// A single query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// The parameter key
    pub key: &'static str,
    /// The unescaped parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a parameter, keeping insertion order.
    pub fn add(&mut self, key: &'static str, value: impl Into<String>) {
        self.items.push(QueryParam::new(key, value));
    }

    /// Looks up the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|p| (p.key, p.value.as_str()))
    }

    /// Returns the parameter keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|p| p.key)
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Formats a float in its shortest round-trippable decimal form.
///
/// Never uses an exponent and never pads with zeros: `1.5` is `"1.5"`,
/// `0.0` is `"0"`.
#[must_use]
pub fn format_float(value: f64) -> String {
    // `Display` for f64 is already shortest-round-trip without exponent.
    value.to_string()
}
