use serde::{Deserialize, Serialize};

/// Script used for prompts and settlement text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    ZhCn,
    ZhTw,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
        }
    }

    pub fn from_opt(value: Option<&str>) -> Self {
        if normalize_locale(value) == "zh_TW" {
            Self::ZhTw
        } else {
            Self::ZhCn
        }
    }

    pub fn text<'a>(self, cn: &'a str, tw: &'a str) -> &'a str {
        if matches!(self, Self::ZhTw) {
            tw
        } else {
            cn
        }
    }
}

pub fn normalize_locale(locale: Option<&str>) -> String {
    let raw = locale.unwrap_or("zh_CN").trim();
    if raw.is_empty() {
        return "zh_CN".to_string();
    }
    let lowered = raw.replace('-', "_").to_ascii_lowercase();
    match lowered.as_str() {
        "zh" | "zh_cn" | "zh_hans" | "zh_hans_cn" | "cn" => "zh_CN".to_string(),
        "zh_tw" | "zh_hant" | "zh_hant_tw" | "zh_hk" | "tw" => "zh_TW".to_string(),
        _ => raw.replace('-', "_"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_aliases_select_zh_tw() {
        for code in ["zh_TW", "zh-TW", "zh_hant", "tw", " ZH-tw "] {
            assert_eq!(Locale::from_opt(Some(code)), Locale::ZhTw, "{code}");
        }
    }

    #[test]
    fn unknown_or_missing_falls_back_to_simplified() {
        assert_eq!(Locale::from_opt(None), Locale::ZhCn);
        assert_eq!(Locale::from_opt(Some("")), Locale::ZhCn);
        assert_eq!(Locale::from_opt(Some("en_US")), Locale::ZhCn);
        assert_eq!(Locale::from_opt(Some("zh-Hans")), Locale::ZhCn);
    }
}
