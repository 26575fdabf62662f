use crate::normalize::{
    parse_hand_pattern, parse_has_jing, parse_jing_count, parse_role, parse_win_event,
};
use nanchang_core::{
    HandPattern, JingCount, Locale, Role, ScenarioKey, ScoreTable, Settlement, WinEvent,
};
use serde::Serialize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub locale: Locale,
    /// Ask for 正精/附精 counts after a jing win and add their bonus.
    pub jing_bonus: bool,
    /// Print the result as a single JSON object instead of text.
    pub json: bool,
}

/// Splits input into whitespace-separated tokens, reading a line at a time.
/// Bytes that are not UTF-8 become U+FFFD, so such a token never parses.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|byte| byte.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    /// Script of `text`, `zh_CN` or `zh_TW`.
    pub locale: &'static str,
    pub key: ScenarioKey,
    pub jing: Option<JingCount>,
    pub bonus: u32,
    /// Settlement after any jing bonus; `None` when nothing was authored.
    pub settlement: Option<Settlement>,
    pub text: Option<String>,
}

/// One interactive settlement: four fields, then a lookup.
pub struct Session<'t, R, W> {
    tokens: TokenReader<R>,
    out: W,
    table: &'t ScoreTable,
    options: SessionOptions,
}

impl<'t, R: BufRead, W: Write> Session<'t, R, W> {
    pub fn new(input: R, out: W, table: &'t ScoreTable, options: SessionOptions) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
            table,
            options,
        }
    }

    pub fn run(mut self) -> Result<SessionOutcome, SessionError> {
        let locale = self.options.locale;
        writeln!(self.out, "{}", locale.text("南昌麻将算牌器", "南昌麻將算牌器"))?;

        let role = self.ask_role()?;
        let event = self.ask_win_event(role)?;
        let has_jing = self.ask_has_jing()?;
        let jing = if has_jing && self.options.jing_bonus {
            Some(self.ask_jing_count()?)
        } else {
            None
        };
        let pattern = self.ask_hand_pattern()?;
        if !pattern.offered_for(event, has_jing) {
            debug!(
                pattern = pattern.id(),
                ?event,
                has_jing,
                "pattern is never scored for this win"
            );
        }

        let key = ScenarioKey::new(role, event, has_jing, pattern);
        let bonus = jing.map(|count| count.bonus()).unwrap_or(0);
        let settlement = self
            .table
            .lookup(&key)
            .map(|settlement| settlement.with_bonus(bonus));
        let outcome = SessionOutcome {
            locale: locale.code(),
            key,
            jing,
            bonus,
            settlement,
            text: settlement.map(|settlement| settlement.text(locale)),
        };
        if outcome.settlement.is_none() {
            info!(?key, "no settlement recorded");
        }
        self.report(&outcome)?;
        Ok(outcome)
    }

    fn report(&mut self, outcome: &SessionOutcome) -> Result<(), SessionError> {
        let locale = self.options.locale;
        if self.options.json {
            writeln!(self.out, "{}", serde_json::to_string(outcome)?)?;
        } else if let Some(text) = outcome.text.as_deref() {
            let note = if outcome.bonus > 0 {
                format!("（已加上精的加成 +{}）", outcome.bonus)
            } else {
                String::new()
            };
            writeln!(
                self.out,
                "{}{text}{note}",
                locale.text("结算结果：", "結算結果：")
            )?;
        } else {
            writeln!(
                self.out,
                "{}",
                locale.text(
                    "暂未录入该组合的分值，请检查输入。",
                    "暫未錄入該組合的分值，請檢查輸入。"
                )
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn ask_role(&mut self) -> Result<Role, SessionError> {
        let prompt = self
            .options
            .locale
            .text("请选择身份（1. 庄家  2. 闲家）：", "請選擇身份（1. 莊家  2. 閒家）：")
            .to_string();
        self.ask("role", &prompt, Role::Dealer, parse_role)
    }

    fn ask_win_event(&mut self, role: Role) -> Result<WinEvent, SessionError> {
        let locale = self.options.locale;
        let options: Vec<String> = role
            .win_events()
            .iter()
            .enumerate()
            .map(|(idx, event)| format!("{}. {}", idx + 1, event.label(locale)))
            .collect();
        let prompt = format!(
            "{}（{}）：",
            locale.text("请选择胡牌方式", "請選擇胡牌方式"),
            options.join("  ")
        );
        self.ask("win_event", &prompt, WinEvent::SelfDraw, |token| {
            parse_win_event(role, token)
        })
    }

    fn ask_has_jing(&mut self) -> Result<bool, SessionError> {
        let prompt = self
            .options
            .locale
            .text(
                "是否有精？（有精输入1或\"有精\"，无精输入0或\"无精\"）：",
                "是否有精？（有精輸入1或\"有精\"，無精輸入0或\"無精\"）：",
            )
            .to_string();
        self.ask("has_jing", &prompt, false, parse_has_jing)
    }

    fn ask_jing_count(&mut self) -> Result<JingCount, SessionError> {
        let locale = self.options.locale;
        let zheng_prompt = locale
            .text("请输入正精数量（0-3）：", "請輸入正精數量（0-3）：")
            .to_string();
        let zheng = self.ask("zheng_jing", &zheng_prompt, 0, parse_jing_count)?;
        let fu_prompt = locale
            .text("请输入附精数量（0-3）：", "請輸入附精數量（0-3）：")
            .to_string();
        let fu = self.ask("fu_jing", &fu_prompt, 0, parse_jing_count)?;
        Ok(JingCount { zheng, fu })
    }

    fn ask_hand_pattern(&mut self) -> Result<HandPattern, SessionError> {
        let locale = self.options.locale;
        let mut prompt = format!("{}\n", locale.text("请选择牌型：", "請選擇牌型："));
        for pattern in HandPattern::ALL {
            prompt.push_str(&format!(
                "  {}. {}\n",
                pattern.menu_index(),
                pattern.label(locale)
            ));
        }
        prompt.push_str(locale.text("请输入编号或牌型名称：", "請輸入編號或牌型名稱："));
        self.ask("hand_pattern", &prompt, HandPattern::PingHu, parse_hand_pattern)
    }

    /// Prompts until `parse` accepts a token. End of input yields `default`.
    fn ask<T: std::fmt::Debug>(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(token) = self.tokens.next_token()? else {
                debug!(field, ?default, "input exhausted, using default");
                return Ok(default);
            };
            if let Some(value) = parse(&token) {
                debug!(field, ?value, "field resolved");
                return Ok(value);
            }
            debug!(field, token = %token, "invalid token");
            writeln!(
                self.out,
                "{}",
                self.options
                    .locale
                    .text("输入无效，请重新输入。", "輸入無效，請重新輸入。")
            )?;
        }
    }
}
