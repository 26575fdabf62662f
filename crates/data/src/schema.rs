use serde::{Deserialize, Serialize};

pub use nanchang_core::{HandPattern, Role, ScenarioKey, Settlement, WinEvent};

/// One authored line of the settlement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRow {
    pub role: Role,
    pub event: WinEvent,
    pub has_jing: bool,
    pub pattern: HandPattern,
    pub settlement: Settlement,
}

impl SettlementRow {
    pub fn key(&self) -> ScenarioKey {
        ScenarioKey::new(self.role, self.event, self.has_jing, self.pattern)
    }
}
