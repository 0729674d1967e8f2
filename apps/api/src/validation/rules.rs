#![allow(dead_code)]

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single constraint applied to a trimmed field value.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    MinLen(usize, &'static str),
    Email(&'static str),
    Url(&'static str),
    Digits(&'static str),
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    /// Returns the rule's message if `value` violates it.
    fn check(&self, value: &str) -> Option<&'static str> {
        let ok = match *self {
            Rule::MinLen(n, _) => value.chars().count() >= n,
            Rule::Email(_) => is_email(value),
            Rule::Url(_) => is_absolute_url(value),
            Rule::Digits(_) => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Rule::OneOf(allowed, _) => allowed.contains(&value),
        };
        if ok {
            None
        } else {
            Some(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::MinLen(_, m)
            | Rule::Email(m)
            | Rule::Url(m)
            | Rule::Digits(m)
            | Rule::OneOf(_, m) => m,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub optional: bool,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn required(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            optional: false,
            rules,
        }
    }

    /// Optional fields accept the empty string and only run their rules on
    /// non-empty input.
    pub const fn optional(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            optional: true,
            rules,
        }
    }
}

/// Declarative per-form constraint set.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub form: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Field name → message, ordered by field name for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.to_string(), message.into());
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Accepted, trimmed values keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct ValidatedForm {
    values: BTreeMap<&'static str, String>,
}

impl ValidatedForm {
    /// Trimmed value of a schema field. Fields absent from the input are "".
    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    /// `None` for an empty optional field.
    pub fn optional(&self, field: &str) -> Option<String> {
        self.values
            .get(field)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

/// Runs every field of `schema` against `values`.
///
/// All fields are checked so the caller receives every message at once, but a
/// single failure rejects the submission as a whole. Fields not named by the
/// schema are ignored.
pub fn validate<'a, I>(schema: &Schema, values: I) -> Result<ValidatedForm, FieldErrors>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let input: BTreeMap<&str, &str> = values.into_iter().collect();
    let mut accepted = BTreeMap::new();
    let mut errors = BTreeMap::new();

    for spec in schema.fields {
        let value = input.get(spec.name).copied().unwrap_or("").trim();

        if spec.optional && value.is_empty() {
            accepted.insert(spec.name, String::new());
            continue;
        }

        match spec.rules.iter().find_map(|rule| rule.check(value)) {
            Some(message) => {
                errors.insert(spec.name.to_string(), message.to_string());
            }
            None => {
                accepted.insert(spec.name, value.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidatedForm { values: accepted })
    } else {
        Err(FieldErrors(errors))
    }
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#@]+(@[^\s/?#]+)?([/?#]\S*)?$")
        .expect("url pattern compiles")
});

/// Syntactic email check. No leading dot and no consecutive dots in the
/// local part.
pub fn is_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(value)
}

/// Absolute URL with a scheme and a non-empty authority.
pub fn is_absolute_url(value: &str) -> bool {
    URL_RE.is_match(value)
}
