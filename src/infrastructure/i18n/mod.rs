//! I18n - 错误消息多语言目录
//!
//! 以 错误码 + 语言 为键查找消息模板，模板中的 `{0}` 由失败细节填充。
//! 找不到模板时返回固定的诊断文本（指明缺失的码），绝不因查找失败而崩溃。
//!
//! 777 (Custom) 的模板即 `{0}` 本身：调用方自定义消息原样透出。
//! 888 (Unauthorized) 刻意不配置目录条目。

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// 语言解析错误
#[derive(Debug, Error)]
#[error("unsupported locale: {0}")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" => Ok(Locale::Zh),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// 按 错误码 + 语言 查找消息模板
fn template(locale: Locale, code: &str) -> Option<&'static str> {
    let template = match (locale, code) {
        (Locale::Zh, "100") => "缺少必填项: {0}",
        (Locale::Zh, "101") => "输入值不合法: {0}",
        (Locale::Zh, "102") => "请求数据格式错误: {0}",
        (Locale::Zh, "103") => "数据已存在: {0}",
        (Locale::Zh, "104") => "数据不存在: {0}",
        (Locale::Zh, "777") => "{0}",
        (Locale::Zh, "999") => "内部服务器错误",

        (Locale::En, "100") => "required input is missing: {0}",
        (Locale::En, "101") => "invalid input: {0}",
        (Locale::En, "102") => "malformed request data: {0}",
        (Locale::En, "103") => "data already exists: {0}",
        (Locale::En, "104") => "data does not exist: {0}",
        (Locale::En, "777") => "{0}",
        (Locale::En, "999") => "internal server error",

        _ => return None,
    };
    Some(template)
}

/// 构造本地化错误消息
pub fn localize(locale: Locale, code: &str, detail: &str) -> String {
    match template(locale, code) {
        Some(template) => template.replace("{0}", detail),
        None => format!("check locale message. invalid code [{code}]"),
    }
}
