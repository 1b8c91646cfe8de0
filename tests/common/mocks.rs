//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real network access.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use starmark::core::models::{RepoRef, StarCount};
use starmark::core::ports::{LookupError, StarSource};

/// Mock star source keyed by `owner/name`
pub struct MockStarSource {
    stars: HashMap<String, StarCount>,
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl MockStarSource {
    pub fn new() -> Self {
        Self {
            stars: HashMap::new(),
            failing: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with(mut self, full_name: &str, stars: StarCount) -> Self {
        self.stars.insert(full_name.to_string(), stars);
        self
    }

    pub fn failing(mut self, full_name: &str) -> Self {
        self.failing.insert(full_name.to_string());
        self
    }

    /// Repositories looked up so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Default for MockStarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StarSource for MockStarSource {
    fn stars(&self, repo: &RepoRef) -> Result<StarCount, LookupError> {
        let name = repo.full_name();
        self.calls.borrow_mut().push(name.clone());

        if self.failing.contains(&name) {
            return Err(LookupError::Transport("connection reset".to_string()));
        }
        self.stars.get(&name).copied().ok_or(LookupError::NotFound(name))
    }
}

impl StarSource for &MockStarSource {
    fn stars(&self, repo: &RepoRef) -> Result<StarCount, LookupError> {
        (**self).stars(repo)
    }
}
