//! Maps raw prompt tokens onto scenario fields. Tokens are compared exactly:
//! a menu number or a label, simplified or traditional.

use nanchang_core::{HandPattern, JingCount, Locale, Role, WinEvent};

const LOCALES: [Locale; 2] = [Locale::ZhCn, Locale::ZhTw];

fn menu_position(token: &str, len: usize) -> Option<usize> {
    (1..=len).find(|idx| token == idx.to_string())
}

fn matches_label(token: &str, label: impl Fn(Locale) -> &'static str) -> bool {
    LOCALES.iter().any(|locale| token == label(*locale))
}

pub fn parse_role(token: &str) -> Option<Role> {
    if let Some(idx) = menu_position(token, Role::ALL.len()) {
        return Some(Role::ALL[idx - 1]);
    }
    Role::ALL
        .into_iter()
        .find(|role| matches_label(token, |locale| role.label(locale)))
}

/// Only the events offered to `role` are accepted, numbered in that role's menu order.
pub fn parse_win_event(role: Role, token: &str) -> Option<WinEvent> {
    let events = role.win_events();
    if let Some(idx) = menu_position(token, events.len()) {
        return Some(events[idx - 1]);
    }
    events
        .iter()
        .copied()
        .find(|event| matches_label(token, |locale| event.label(locale)))
}

pub fn parse_has_jing(token: &str) -> Option<bool> {
    match token {
        "1" | "有精" | "是" => Some(true),
        "0" | "无精" | "無精" | "否" => Some(false),
        _ => None,
    }
}

pub fn parse_hand_pattern(token: &str) -> Option<HandPattern> {
    if let Some(idx) = menu_position(token, HandPattern::ALL.len()) {
        return Some(HandPattern::ALL[idx - 1]);
    }
    if token == "七对" {
        return Some(HandPattern::QiDui);
    }
    HandPattern::ALL
        .into_iter()
        .find(|pattern| matches_label(token, |locale| pattern.label(locale)))
}

pub fn parse_jing_count(token: &str) -> Option<u8> {
    (0..=JingCount::MAX_PER_KIND).find(|count| token == count.to_string())
}
