use crate::Locale;
use serde::{Deserialize, Serialize};

/// Payout for one scenario, in points ("个").
///
/// `dealer` is what the dealer pays (zero when the dealer is the winner),
/// `discarder` what a non-dealer discarder pays on top of the others, and
/// `others` what each remaining non-dealer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settlement {
    #[serde(default)]
    pub dealer: u32,
    #[serde(default)]
    pub discarder: Option<u32>,
    pub others: u32,
}

impl Settlement {
    /// Every opponent pays the same amount.
    pub const fn flat(amount: u32) -> Self {
        Self {
            dealer: 0,
            discarder: None,
            others: amount,
        }
    }

    pub const fn split(dealer: u32, others: u32) -> Self {
        Self {
            dealer,
            discarder: None,
            others,
        }
    }

    pub const fn with_discarder(dealer: u32, discarder: u32, others: u32) -> Self {
        Self {
            dealer,
            discarder: Some(discarder),
            others,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.dealer == 0 && self.discarder.is_none()
    }

    /// Adds `bonus` to every amount that is actually owed.
    pub fn with_bonus(&self, bonus: u32) -> Self {
        let bump = |value: u32| {
            if value > 0 {
                value.saturating_add(bonus)
            } else {
                0
            }
        };
        Self {
            dealer: bump(self.dealer),
            discarder: self.discarder.map(bump),
            others: bump(self.others),
        }
    }

    /// Settlement text, e.g. `4` or `庄家2个，放炮2个，闲家1个`.
    pub fn text(&self, locale: Locale) -> String {
        if self.is_flat() {
            return self.others.to_string();
        }
        let unit = locale.text("个", "個");
        let mut parts = Vec::with_capacity(3);
        if self.dealer > 0 {
            parts.push(format!("{}{}{unit}", locale.text("庄家", "莊家"), self.dealer));
        }
        if let Some(amount) = self.discarder {
            // 放炮 is written the same in both scripts.
            parts.push(format!("{}{amount}{unit}", locale.text("放炮", "放炮")));
        }
        parts.push(format!("{}{}{unit}", locale.text("闲家", "閒家"), self.others));
        parts.join("，")
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text(Locale::ZhCn))
    }
}

/// Jing tiles held at the win: 正精 count double, 附精 count single.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JingCount {
    pub zheng: u8,
    pub fu: u8,
}

impl JingCount {
    pub const MAX_PER_KIND: u8 = 3;

    pub fn bonus(&self) -> u32 {
        u32::from(self.zheng) * 2 + u32::from(self.fu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_settlement_renders_bare_number() {
        assert_eq!(Settlement::flat(16).text(Locale::ZhCn), "16");
        assert_eq!(Settlement::flat(4).to_string(), "4");
    }

    #[test]
    fn discard_parts_are_ordered_dealer_discarder_others() {
        assert_eq!(
            Settlement::with_discarder(0, 13, 4).to_string(),
            "放炮13个，闲家4个"
        );
        assert_eq!(
            Settlement::with_discarder(16, 21, 8).to_string(),
            "庄家16个，放炮21个，闲家8个"
        );
        assert_eq!(Settlement::split(37, 8).to_string(), "庄家37个，闲家8个");
    }

    #[test]
    fn traditional_text_uses_traditional_script() {
        assert_eq!(
            Settlement::with_discarder(2, 2, 1).text(Locale::ZhTw),
            "莊家2個，放炮2個，閒家1個"
        );
        let split = Settlement::split(4, 2).text(Locale::ZhTw);
        assert_eq!(split, "莊家4個，閒家2個");
        assert!(!split.contains('个'));
        assert_eq!(Settlement::flat(4).text(Locale::ZhTw), "4");
    }

    #[test]
    fn bonus_skips_parties_that_owe_nothing() {
        let bumped = Settlement::with_discarder(0, 8, 4).with_bonus(3);
        assert_eq!(bumped, Settlement::with_discarder(0, 11, 7));
        assert_eq!(Settlement::split(4, 2).with_bonus(0), Settlement::split(4, 2));
    }

    #[test]
    fn zheng_jing_counts_double() {
        let count = JingCount { zheng: 2, fu: 1 };
        assert_eq!(count.bonus(), 5);
        assert_eq!(JingCount::default().bonus(), 0);
    }
}
