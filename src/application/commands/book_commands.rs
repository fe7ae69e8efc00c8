//! Book Commands

use chrono::NaiveDate;

use crate::domain::author::AuthorId;
use crate::domain::book::BookId;

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub author_id: AuthorId,
}

/// 修改图书命令（部分更新：未给定的字段不修改）
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<NaiveDate>,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
