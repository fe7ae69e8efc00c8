//! Book Queries

use crate::application::ports::PageRequest;
use crate::domain::book::BookId;

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBookDetail {
    pub book_id: BookId,
}

/// 分页列出图书查询
///
/// title 非空时按标题大小写不敏感包含匹配过滤。
#[derive(Debug, Clone)]
pub struct ListBooks {
    pub page: PageRequest,
    pub title: String,
}
