//! Declarative form schemas and the pure validator that consumes them.

pub mod rules;
pub mod schemas;

pub use rules::{validate, FieldErrors, Schema, ValidatedForm};
