use crate::{HandPattern, Role, ScenarioKey, Settlement, WinEvent};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("scenario defined twice: {0:?}")]
    DuplicateScenario(ScenarioKey),
    #[error("win event not possible for this seat: {0:?}")]
    InvalidScenario(ScenarioKey),
}

/// Settlement for every authored scenario. Built once through [`ScoreTable::define`]
/// and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: HashMap<ScenarioKey, Settlement>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(
        &mut self,
        role: Role,
        event: WinEvent,
        has_jing: bool,
        pattern: HandPattern,
        settlement: Settlement,
    ) -> Result<(), TableError> {
        let key = ScenarioKey::new(role, event, has_jing, pattern);
        if !key.is_consistent() {
            return Err(TableError::InvalidScenario(key));
        }
        if self.entries.contains_key(&key) {
            return Err(TableError::DuplicateScenario(key));
        }
        self.entries.insert(key, settlement);
        Ok(())
    }

    /// `None` means no settlement was authored for this combination.
    pub fn lookup(&self, key: &ScenarioKey) -> Option<&Settlement> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn entries(&self) -> Vec<(ScenarioKey, Settlement)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, settlement)| (*key, *settlement))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }
}
