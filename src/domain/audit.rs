//! 审计时间戳
//!
//! 每个实体内嵌一份创建/更新时间，写路径在创建时打点、在变更时刷新。

use chrono::{DateTime, Utc};

/// 创建/更新时间对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamp {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AuditStamp {
    /// 新建实体时打点，两个时间相同
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储恢复
    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// 变更时刷新更新时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for AuditStamp {
    fn default() -> Self {
        Self::new()
    }
}
