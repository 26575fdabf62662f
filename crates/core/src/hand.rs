use crate::{Locale, WinEvent};
use serde::{Deserialize, Serialize};

/// Named shape of a completed hand. The order of [`HandPattern::ALL`] is the
/// order of the selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandPattern {
    PingHu,
    JingDiao,
    GangKai,
    QiDui,
    ShiSanLan,
    QiXingShiSanLan,
}

impl HandPattern {
    pub const ALL: [HandPattern; 6] = [
        HandPattern::PingHu,
        HandPattern::JingDiao,
        HandPattern::GangKai,
        HandPattern::QiDui,
        HandPattern::ShiSanLan,
        HandPattern::QiXingShiSanLan,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandPattern::PingHu => "ping_hu",
            HandPattern::JingDiao => "jing_diao",
            HandPattern::GangKai => "gang_kai",
            HandPattern::QiDui => "qi_dui",
            HandPattern::ShiSanLan => "shi_san_lan",
            HandPattern::QiXingShiSanLan => "qi_xing_shi_san_lan",
        }
    }

    /// Menu label. The simplified seven-pairs label is written `7对`.
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            HandPattern::PingHu => "平胡",
            HandPattern::JingDiao => "精吊",
            HandPattern::GangKai => locale.text("杠开", "槓開"),
            HandPattern::QiDui => locale.text("7对", "七對"),
            HandPattern::ShiSanLan => locale.text("十三烂", "十三爛"),
            HandPattern::QiXingShiSanLan => locale.text("七星十三烂", "七星十三爛"),
        }
    }

    /// 1-based position in the menu.
    pub fn menu_index(self) -> usize {
        Self::ALL
            .iter()
            .position(|pattern| *pattern == self)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    /// Whether the pattern can be scored at all for this event and jing state.
    /// 精吊 needs a self-draw with jing; 杠开 needs a self-draw.
    pub fn offered_for(self, event: WinEvent, has_jing: bool) -> bool {
        match self {
            HandPattern::JingDiao => event == WinEvent::SelfDraw && has_jing,
            HandPattern::GangKai => event == WinEvent::SelfDraw,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_indices_are_one_based_and_ordered() {
        let indices: Vec<usize> = HandPattern::ALL.iter().map(|p| p.menu_index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn simplified_labels_match_menu_text() {
        let labels: Vec<&str> = HandPattern::ALL
            .iter()
            .map(|p| p.label(Locale::ZhCn))
            .collect();
        assert_eq!(
            labels,
            vec!["平胡", "精吊", "杠开", "7对", "十三烂", "七星十三烂"]
        );
    }

    #[test]
    fn jing_diao_and_gang_kai_are_limited_to_self_draw() {
        assert!(HandPattern::JingDiao.offered_for(WinEvent::SelfDraw, true));
        assert!(!HandPattern::JingDiao.offered_for(WinEvent::SelfDraw, false));
        assert!(!HandPattern::JingDiao.offered_for(WinEvent::DealerDiscard, true));
        assert!(HandPattern::GangKai.offered_for(WinEvent::SelfDraw, false));
        assert!(!HandPattern::GangKai.offered_for(WinEvent::NonDealerDiscard, true));
        assert!(HandPattern::QiDui.offered_for(WinEvent::NonDealerDiscard, false));
    }
}
