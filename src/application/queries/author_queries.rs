//! Author Queries

use crate::domain::author::AuthorId;

/// 获取作者详情查询（含名下图书）
#[derive(Debug, Clone)]
pub struct GetAuthorDetail {
    pub author_id: AuthorId,
}

/// 分页列出作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors {
    pub page_num: u32,
    pub page_size: u32,
}
