//! 締切日時抽出モジュール

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 時刻がない場合の締切時刻（その日の終わり）
const DEFAULT_TIME: (u32, u32) = (23, 59);

// 数字は半角のみ。全角数字は日付・時刻として扱わない
static RE_SLASH_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})[（(]([月火水木金土日])[）)]").unwrap()
});
static RE_KANJI_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})月([0-9]{1,2})日[（(]([月火水木金土日])[）)]").unwrap()
});
static RE_FULL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})").unwrap());
static RE_TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]{1,2}):([0-9]{2})").unwrap());

/// 年月日（日付の妥当性は確認しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarDay {
    year: i32,
    month: u32,
    day: u32,
}

/// 日付の抽出ルール
struct DateRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    build: fn(&Captures, i32) -> Option<CalendarDay>,
}

/// 優先順に評価する
static DATE_RULES: &[DateRule] = &[
    // 5/10（土）
    DateRule {
        name: "slash_weekday",
        regex: &RE_SLASH_WEEKDAY,
        build: month_day,
    },
    // 5月10日（土）
    DateRule {
        name: "kanji_weekday",
        regex: &RE_KANJI_WEEKDAY,
        build: month_day,
    },
    // 2025/09/01
    DateRule {
        name: "full_date",
        regex: &RE_FULL_DATE,
        build: year_month_day,
    },
];

impl DateRule {
    fn apply(&self, text: &str, current_year: i32) -> Option<CalendarDay> {
        let caps = self.regex.captures(text)?;
        (self.build)(&caps, current_year)
    }
}

/// 月/日のみの形式。年は現在の年
fn month_day(caps: &Captures, current_year: i32) -> Option<CalendarDay> {
    Some(CalendarDay {
        year: current_year,
        month: caps.get(1)?.as_str().parse().ok()?,
        day: caps.get(2)?.as_str().parse().ok()?,
    })
}

/// 年付きの形式
fn year_month_day(caps: &Captures, _current_year: i32) -> Option<CalendarDay> {
    Some(CalendarDay {
        year: caps.get(1)?.as_str().parse().ok()?,
        month: caps.get(2)?.as_str().parse().ok()?,
        day: caps.get(3)?.as_str().parse().ok()?,
    })
}

/// テキストから締切日時を抽出 (YYYY-MM-DDTHH:MM:SS形式)
pub fn extract_deadline(text: &str, current_year: i32) -> Option<String> {
    let day = DATE_RULES.iter().find_map(|rule| {
        let day = rule.apply(text, current_year)?;
        tracing::debug!(rule = rule.name, ?day, "締切日を検出");
        Some(day)
    })?;

    let (hour, minute) = extract_time(text).unwrap_or(DEFAULT_TIME);

    Some(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00",
        day.year, day.month, day.day, hour, minute
    ))
}

/// テキスト中の最初の HH:MM を抽出
fn extract_time(text: &str) -> Option<(u32, u32)> {
    let caps = RE_TIME.captures(text)?;
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = caps.get(2)?.as_str().parse().ok()?;
    Some((hour, minute))
}

/// 締切日時の文字列が実在する日時かチェック
///
/// 抽出結果は 2/30 のような日付もそのまま通すので、保存側で弾きたい場合に使う。
pub fn is_valid_deadline_date(value: &str) -> bool {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
}
