// tests/support/mocks/predicates.rs
use std::collections::HashSet;
use std::sync::Mutex;

use unique_slug::{DomainResult, ExistencePredicate, ScopeFilter, Slug};

/// Reports the configured slugs as taken and records every candidate asked.
#[derive(Default)]
pub struct CountingPredicate {
    taken: HashSet<String>,
    pub seen: Mutex<Vec<String>>,
}

impl CountingPredicate {
    pub fn new(taken: &[&str]) -> Self {
        Self {
            taken: taken.iter().map(|s| s.to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl ExistencePredicate for CountingPredicate {
    fn exists(&self, candidate: &Slug, _scope: &ScopeFilter) -> DomainResult<bool> {
        self.seen.lock().unwrap().push(candidate.to_string());
        Ok(self.taken.contains(candidate.as_str()))
    }
}

pub struct AlwaysTaken;

impl ExistencePredicate for AlwaysTaken {
    fn exists(&self, _candidate: &Slug, _scope: &ScopeFilter) -> DomainResult<bool> {
        Ok(true)
    }
}
