use crate::{HandPattern, Locale};
use serde::{Deserialize, Serialize};

/// Seat of the winning player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dealer,
    NonDealer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Dealer, Role::NonDealer];

    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Role::Dealer => locale.text("庄家", "莊家"),
            Role::NonDealer => locale.text("闲家", "閒家"),
        }
    }

    /// Win events a player in this seat can report, in menu order.
    pub fn win_events(self) -> &'static [WinEvent] {
        match self {
            Role::Dealer => &[WinEvent::SelfDraw, WinEvent::NonDealerDiscard],
            Role::NonDealer => &[
                WinEvent::SelfDraw,
                WinEvent::DealerDiscard,
                WinEvent::NonDealerDiscard,
            ],
        }
    }
}

/// How the winning tile arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinEvent {
    SelfDraw,
    DealerDiscard,
    NonDealerDiscard,
}

impl WinEvent {
    pub const ALL: [WinEvent; 3] = [
        WinEvent::SelfDraw,
        WinEvent::DealerDiscard,
        WinEvent::NonDealerDiscard,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            WinEvent::SelfDraw => "自摸",
            WinEvent::DealerDiscard => locale.text("庄家放炮", "莊家放炮"),
            WinEvent::NonDealerDiscard => locale.text("闲家放炮", "閒家放炮"),
        }
    }

    /// A dealer cannot win off their own discard.
    pub fn allowed_for(self, role: Role) -> bool {
        role.win_events().contains(&self)
    }
}

/// Lookup key into the settlement table. All four fields take part in
/// equality, hashing and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScenarioKey {
    pub role: Role,
    pub event: WinEvent,
    pub has_jing: bool,
    pub pattern: HandPattern,
}

impl ScenarioKey {
    pub fn new(role: Role, event: WinEvent, has_jing: bool, pattern: HandPattern) -> Self {
        Self {
            role,
            event,
            has_jing,
            pattern,
        }
    }

    /// Every theoretical combination, including the ones no table defines.
    pub fn all() -> impl Iterator<Item = ScenarioKey> {
        Role::ALL.into_iter().flat_map(|role| {
            WinEvent::ALL.into_iter().flat_map(move |event| {
                [true, false].into_iter().flat_map(move |has_jing| {
                    HandPattern::ALL
                        .into_iter()
                        .map(move |pattern| ScenarioKey::new(role, event, has_jing, pattern))
                })
            })
        })
    }

    pub fn is_consistent(&self) -> bool {
        self.event.allowed_for(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_enumerates_seventy_two_distinct_keys() {
        let keys: HashSet<ScenarioKey> = ScenarioKey::all().collect();
        assert_eq!(keys.len(), 72);
    }

    #[test]
    fn dealer_cannot_report_dealer_discard() {
        assert!(!WinEvent::DealerDiscard.allowed_for(Role::Dealer));
        assert!(WinEvent::DealerDiscard.allowed_for(Role::NonDealer));
        assert!(WinEvent::NonDealerDiscard.allowed_for(Role::Dealer));
        let key = ScenarioKey::new(
            Role::Dealer,
            WinEvent::DealerDiscard,
            true,
            HandPattern::PingHu,
        );
        assert!(!key.is_consistent());
    }

    #[test]
    fn keys_differing_only_in_jing_are_distinct() {
        let with = ScenarioKey::new(Role::Dealer, WinEvent::SelfDraw, true, HandPattern::QiDui);
        let without = ScenarioKey { has_jing: false, ..with };
        assert_ne!(with, without);
        assert!(without < with);
    }
}
