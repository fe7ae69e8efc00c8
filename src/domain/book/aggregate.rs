//! Book Context - Aggregate Root

use chrono::{Local, NaiveDate};

use super::BookId;
use crate::domain::audit::AuditStamp;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainError;
use crate::domain::isbn::validate_isbn10;

/// Book 聚合根
///
/// 不变量:
/// - isbn 在构造前必须通过 ISBN-10 格式校验，校验失败则图书不会被创建
/// - author_id 构造时设置一次，此后不可变
/// - description / publication_date 为可选项，缺省值在读取时计算
#[derive(Debug, Clone)]
pub struct Book {
    id: Option<BookId>,
    title: String,
    description: Option<String>,
    isbn: String,
    publication_date: Option<NaiveDate>,
    author_id: AuthorId,
    stamp: AuditStamp,
}

impl Book {
    /// 创建新图书
    ///
    /// isbn 校验失败时原样传播校验错误。
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        isbn: impl Into<String>,
        publication_date: Option<NaiveDate>,
        author_id: AuthorId,
    ) -> Result<Self, DomainError> {
        let isbn = isbn.into();
        validate_isbn10(&isbn)?;

        Ok(Self {
            id: None,
            title: title.into(),
            description,
            isbn,
            publication_date,
            author_id,
            stamp: AuditStamp::new(),
        })
    }

    /// 从存储恢复已持久化的图书
    #[allow(clippy::too_many_arguments)]
    pub fn hydrate(
        id: BookId,
        title: String,
        description: Option<String>,
        isbn: String,
        publication_date: Option<NaiveDate>,
        author_id: AuthorId,
        stamp: AuditStamp,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            description,
            isbn,
            publication_date,
            author_id,
            stamp,
        }
    }

    /// 部分更新
    ///
    /// title/description 仅在给定且非空白时覆盖；publication_date 仅在
    /// 给定时覆盖。未给定或空白一律视为不修改。
    pub fn update(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
        publication_date: Option<NaiveDate>,
    ) {
        let mut changed = false;

        if let Some(title) = title {
            if !title.trim().is_empty() {
                self.title = title.to_string();
                changed = true;
            }
        }

        if let Some(description) = description {
            if !description.trim().is_empty() {
                self.description = Some(description.to_string());
                changed = true;
            }
        }

        if let Some(date) = publication_date {
            self.publication_date = Some(date);
            changed = true;
        }

        if changed {
            self.stamp.touch();
        }
    }

    // Getters
    pub fn id(&self) -> Option<BookId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 未设置描述时返回空字符串，对外永远不暴露 null
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// 存储态描述（持久化用）
    pub fn raw_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// 未设置出版日期时返回读取当日的日期
    ///
    /// 这是读取时计算而非存储默认值：同一本未设日期的图书在不同日期
    /// 读取会得到不同的值。
    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// 存储态出版日期（持久化用）
    pub fn raw_publication_date(&self) -> Option<NaiveDate> {
        self.publication_date
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn stamp(&self) -> &AuditStamp {
        &self.stamp
    }
}
