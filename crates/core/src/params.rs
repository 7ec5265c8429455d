//! JSON override objects layered over a base configuration.
//!
//! Overrides are lenient: a key that is absent, or whose value has the wrong
//! JSON type, keeps the base value. `{"dt": 0.005}` changes only `dt`.

use glam::DVec2;
use serde_json::Value;

/// Borrowed view of a JSON override object.
///
/// Anything that is not an object behaves like `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Overrides<'a>(&'a Value);

impl<'a> Overrides<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    fn key(&self, name: &str) -> Option<&'a Value> {
        self.0.as_object()?.get(name)
    }

    /// A number, integers included.
    pub fn real(&self, name: &str, base: f64) -> f64 {
        self.key(name).and_then(Value::as_f64).unwrap_or(base)
    }

    /// A non-negative integer that fits in `usize`. Floats are not truncated.
    pub fn count(&self, name: &str, base: usize) -> usize {
        self.key(name)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(base)
    }

    pub fn flag(&self, name: &str, base: bool) -> bool {
        self.key(name).and_then(Value::as_bool).unwrap_or(base)
    }

    /// The string at `name`, if present. Callers decide how to parse it.
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.key(name).and_then(Value::as_str)
    }

    /// A two-element numeric array `[x, y]`.
    pub fn vec2(&self, name: &str, base: DVec2) -> DVec2 {
        match self.key(name).and_then(Value::as_array).map(Vec::as_slice) {
            Some([x, y]) => x
                .as_f64()
                .zip(y.as_f64())
                .map_or(base, |(x, y)| DVec2::new(x, y)),
            _ => base,
        }
    }
}
