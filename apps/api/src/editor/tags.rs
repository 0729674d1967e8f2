#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::validation::{schemas, validate};

/// Tag lists the profile editor exposes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Skills,
    Interests,
}

impl TagKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "skills" => Some(Self::Skills),
            "interests" => Some(Self::Interests),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagChange {
    Added,
    Blank,
    Duplicate,
}

/// Ordered set of short labels. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed value unless it is blank or already present.
    pub fn add(&mut self, value: &str) -> TagChange {
        let Ok(form) = validate(&schemas::TAG, [("value", value)]) else {
            return TagChange::Blank;
        };
        let value = form.value("value");
        if self.contains(&value) {
            return TagChange::Duplicate;
        }
        self.0.push(value);
        TagChange::Added
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        let value = value.trim();
        match self.0.iter().position(|t| t == value) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|t| t == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = TagList::new();
        for value in iter {
            list.add(value.as_ref());
        }
        list
    }
}
