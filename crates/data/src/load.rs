use crate::schema::SettlementRow;
use anyhow::Context;
use nanchang_core::ScoreTable;
use std::sync::OnceLock;
use tracing::debug;

const BUILTIN_JSON: &[u8] = include_bytes!("../settlements.json");

static BUILTIN_TABLE: OnceLock<ScoreTable> = OnceLock::new();

/// The authored Nanchang settlement table, parsed on first use and never
/// mutated afterwards.
pub fn builtin_table() -> &'static ScoreTable {
    BUILTIN_TABLE.get_or_init(|| {
        load_score_table(BUILTIN_JSON).expect("built-in settlements.json must be valid")
    })
}

pub fn load_rows(json_bytes: &[u8]) -> anyhow::Result<Vec<SettlementRow>> {
    let rows = serde_json::from_slice(json_bytes).context("parse settlements JSON")?;
    Ok(rows)
}

pub fn load_score_table(json_bytes: &[u8]) -> anyhow::Result<ScoreTable> {
    let rows = load_rows(json_bytes)?;
    build_score_table(&rows)
}

/// Folds rows into a table. A repeated or impossible scenario is an error,
/// never a silent overwrite.
pub fn build_score_table(rows: &[SettlementRow]) -> anyhow::Result<ScoreTable> {
    let mut table = ScoreTable::new();
    for (idx, row) in rows.iter().enumerate() {
        table
            .define(row.role, row.event, row.has_jing, row.pattern, row.settlement)
            .with_context(|| format!("settlement row {idx} ({:?})", row.key()))?;
    }
    debug!(entries = table.len(), "settlement table built");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanchang_core::{HandPattern, Role, ScenarioKey, Settlement, WinEvent};

    #[test]
    fn builtin_json_is_valid() {
        let table = load_score_table(BUILTIN_JSON).expect("builtin table");
        assert_eq!(table.len(), 46);
    }

    #[test]
    fn builtin_table_is_shared() {
        let first = builtin_table() as *const ScoreTable;
        let second = builtin_table() as *const ScoreTable;
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_rows_fail_with_row_context() {
        let json = br#"[
            {"role": "dealer", "event": "self_draw", "has_jing": true, "pattern": "ping_hu", "settlement": {"others": 4}},
            {"role": "dealer", "event": "self_draw", "has_jing": true, "pattern": "ping_hu", "settlement": {"others": 5}}
        ]"#;
        let err = load_score_table(json).unwrap_err();
        assert!(err.to_string().starts_with("settlement row 1 ("));
        assert!(err.to_string().contains("PingHu"));
        assert!(format!("{err:#}").contains("scenario defined twice"));
    }

    #[test]
    fn dealer_discard_rows_for_dealer_are_rejected() {
        let json = br#"[
            {"role": "dealer", "event": "dealer_discard", "has_jing": false, "pattern": "qi_dui", "settlement": {"dealer": 21, "others": 4}}
        ]"#;
        let err = load_score_table(json).unwrap_err();
        assert!(format!("{err:#}").contains("not possible"));
    }

    #[test]
    fn unknown_pattern_is_a_parse_error() {
        let json = br#"[
            {"role": "dealer", "event": "self_draw", "has_jing": true, "pattern": "tian_hu", "settlement": {"others": 4}}
        ]"#;
        let err = load_score_table(json).unwrap_err();
        assert!(err.to_string().contains("parse settlements JSON"));
    }

    #[test]
    fn optional_amounts_default_when_absent() {
        let json = br#"[
            {"role": "non_dealer", "event": "non_dealer_discard", "has_jing": true, "pattern": "qi_dui", "settlement": {"dealer": 4, "discarder": 4, "others": 2}},
            {"role": "dealer", "event": "self_draw", "has_jing": false, "pattern": "gang_kai", "settlement": {"others": 21}}
        ]"#;
        let table = load_score_table(json).expect("table");
        let discard = ScenarioKey::new(
            Role::NonDealer,
            WinEvent::NonDealerDiscard,
            true,
            HandPattern::QiDui,
        );
        assert_eq!(
            table.lookup(&discard),
            Some(&Settlement::with_discarder(4, 4, 2))
        );
        let draw = ScenarioKey::new(Role::Dealer, WinEvent::SelfDraw, false, HandPattern::GangKai);
        assert_eq!(table.lookup(&draw), Some(&Settlement::flat(21)));
    }
}
