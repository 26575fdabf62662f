use crate::session::SessionOptions;
use nanchang_core::Locale;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub locale: Locale,
    pub jing_bonus: bool,
    pub json: bool,
    pub verbose: bool,
    pub help: bool,
    pub unknown: Vec<String>,
}

impl CliOptions {
    pub fn session(&self) -> SessionOptions {
        SessionOptions {
            locale: self.locale,
            jing_bonus: self.jing_bonus,
            json: self.json,
        }
    }
}

pub fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut locale_arg: Option<String> = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--jing-bonus" => options.jing_bonus = true,
            "--json" => options.json = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            "--lang" | "-l" => {
                if let Some(value) = args.get(idx + 1) {
                    locale_arg = Some(value.clone());
                    idx += 1;
                }
            }
            other => options.unknown.push(other.to_string()),
        }
        idx += 1;
    }
    options.locale = Locale::from_opt(locale_arg.as_deref());
    options
}

pub fn help_text(locale: Locale) -> String {
    let lines = [
        locale.text(
            "用法: nanchang [--lang zh_CN|zh_TW] [--jing-bonus] [--json] [-v]",
            "用法: nanchang [--lang zh_CN|zh_TW] [--jing-bonus] [--json] [-v]",
        ),
        locale.text(
            "  --lang, -l     界面语言（zh_CN 或 zh_TW）",
            "  --lang, -l     介面語言（zh_CN 或 zh_TW）",
        ),
        locale.text(
            "  --jing-bonus   有精时询问正精/附精数量并加分（正精×2，附精×1）",
            "  --jing-bonus   有精時詢問正精/附精數量並加分（正精×2，附精×1）",
        ),
        locale.text(
            "  --json         以 JSON 输出结算结果",
            "  --json         以 JSON 輸出結算結果",
        ),
        locale.text(
            "  --verbose, -v  在标准错误输出调试日志",
            "  --verbose, -v  在標準錯誤輸出除錯日誌",
        ),
    ];
    lines.join("\n")
}
