//! Author Context - Aggregate Root

use super::AuthorId;
use crate::domain::audit::AuditStamp;
use crate::domain::errors::DomainError;

/// Author 聚合根
///
/// 不变量:
/// - 已持久化的作者 name 与 email 永不为空
/// - email 创建后不可修改
/// - 删除作者时名下图书一并删除（由编排层在单事务内完成）
#[derive(Debug, Clone)]
pub struct Author {
    id: Option<AuthorId>,
    name: String,
    email: String,
    stamp: AuditStamp,
}

impl Author {
    /// 创建新作者
    ///
    /// name/email 的格式检查在请求边界完成，这里按原样保存。
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            stamp: AuditStamp::new(),
        }
    }

    /// 从存储恢复已持久化的作者
    pub fn hydrate(id: AuthorId, name: String, email: String, stamp: AuditStamp) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            stamp,
        }
    }

    /// 修改作者姓名
    ///
    /// 空白姓名视为缺少必填项。email 不提供修改入口。
    pub fn update_name(&mut self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::required_input(format!(
                "name[{name}] is required."
            )));
        }
        self.name = name.to_string();
        self.stamp.touch();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn stamp(&self) -> &AuditStamp {
        &self.stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorType;

    #[test]
    fn test_author_creation_stores_verbatim() {
        let author = Author::new("홍길동", "hong@example.com");
        assert!(author.id().is_none());
        assert_eq!(author.name(), "홍길동");
        assert_eq!(author.email(), "hong@example.com");
    }

    #[test]
    fn test_update_name_replaces() {
        let mut author = Author::new("before", "a@example.com");
        author.update_name("after").unwrap();
        assert_eq!(author.name(), "after");
    }

    #[test]
    fn test_update_name_rejects_blank() {
        let mut author = Author::new("before", "a@example.com");

        let err = author.update_name("").unwrap_err();
        assert_eq!(err.error_type, ErrorType::RequiredInput);
        assert_eq!(err.detail, "name[] is required.");

        let err = author.update_name("   ").unwrap_err();
        assert_eq!(err.error_type, ErrorType::RequiredInput);

        // 失败不应改动已有值
        assert_eq!(author.name(), "before");
    }
}
