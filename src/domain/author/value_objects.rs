//! Author Context - Value Objects

use serde::{Deserialize, Serialize};

/// 作者唯一标识
///
/// 由存储层在首次持久化时分配，此后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(i64);

impl AuthorId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AuthorId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
