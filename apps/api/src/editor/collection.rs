#![allow(dead_code)]

use serde::Serialize;
use uuid::Uuid;

use crate::models::education::{CertificationEntry, EducationEntry};
use crate::models::project::Project;

/// A committed record carrying the identifier assigned at creation.
pub trait Record {
    fn id(&self) -> Uuid;
}

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for CertificationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Ordered sequence of committed records.
///
/// Positions shift after every removal; ids do not.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}
