//! Value type for the VM
//!
//! The execution core operates on a single value kind: a double-precision
//! float. No tagging, no heap objects.

/// Runtime value.
pub type Value = f64;

/// Render a value the way diagnostics and traces print it: the shortest
/// representation that round-trips (`1.2`, not `1.200000`; `7`, not `7.0`).
pub fn format_value(value: Value) -> String {
    format!("{}", value)
}
