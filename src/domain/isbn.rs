//! ISBN-10 格式校验
//!
//! 规则按顺序逐条检查，命中即返回：
//! 1. 非空且不能全为空白
//! 2. 必须恰好包含两个连字符
//! 3. 去掉连字符后必须是 10 位 ASCII 数字
//! 4. 前三位数字必须落在 [100, 900] 区间内
//! 5. 第 10 位（最后一位）必须是 '0'
//!
//! 请求边界预检和 Book 聚合构造共用这一份实现，规则不允许分叉。

use super::errors::DomainError;

/// 校验候选字符串是否为合法的 ISBN-10 展示格式（如 `123-456789-0`）
pub fn validate_isbn10(candidate: &str) -> Result<(), DomainError> {
    if candidate.trim().is_empty() {
        return Err(DomainError::invalid_input("isbn-10 must not be blank"));
    }

    if candidate.chars().filter(|&ch| ch == '-').count() != 2 {
        return Err(DomainError::invalid_input(
            "isbn-10 must contain two hyphens",
        ));
    }

    let digits: String = candidate.chars().filter(|&ch| ch != '-').collect();

    if digits.len() != 10 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(DomainError::invalid_input("isbn-10 must be 10 digits"));
    }

    let prefix: u32 = digits[..3]
        .parse()
        .map_err(|_| DomainError::invalid_input("isbn-10 prefix is not a number"))?;
    if !(100..=900).contains(&prefix) {
        return Err(DomainError::invalid_input(
            "isbn-10 prefix must be between 100 and 900",
        ));
    }

    if digits.as_bytes()[9] != b'0' {
        return Err(DomainError::invalid_input(
            "isbn-10 checksum digit must be 0",
        ));
    }

    Ok(())
}
