use crate::classify::types::{Fork, RiskLevel};
use itertools::Itertools;
use std::collections::HashMap;

/// The classified forks the user is working through. Deleting a fork only
/// drops its record; the others keep the level they were given.
#[derive(Debug, Default)]
pub struct WorkingSet {
    forks: Vec<Fork>,
}

impl WorkingSet {
    pub fn new(forks: Vec<Fork>) -> Self {
        Self { forks }
    }

    pub fn len(&self) -> usize {
        self.forks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forks.is_empty()
    }

    /// Drops every record whose `nameWithOwner` is exactly `name_with_owner`.
    /// Returns how many were removed.
    pub fn remove(&mut self, name_with_owner: &str) -> usize {
        let before = self.forks.len();
        self.forks.retain(|f| f.name_with_owner != name_with_owner);
        before - self.forks.len()
    }

    pub fn groups(&self) -> Vec<(RiskLevel, Vec<&Fork>)> {
        let mut by_level: HashMap<RiskLevel, Vec<&Fork>> =
            self.forks.iter().into_group_map_by(|f| f.risk_level);
        RiskLevel::ALL
            .iter()
            .map(|level| (*level, by_level.remove(level).unwrap_or_default()))
            .collect()
    }

    /// Forks in display order: by level, then in the order they were listed.
    pub fn ordered(&self) -> Vec<&Fork> {
        self.groups()
            .into_iter()
            .flat_map(|(_, forks)| forks)
            .collect()
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        self.forks.iter().filter(|f| f.risk_level == level).count()
    }
}
