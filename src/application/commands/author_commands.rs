//! Author Commands

use crate::domain::author::AuthorId;

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
    pub email: String,
}

/// 修改作者姓名命令
#[derive(Debug, Clone)]
pub struct UpdateAuthor {
    pub author_id: AuthorId,
    pub name: String,
}

/// 删除作者命令（级联删除名下图书）
#[derive(Debug, Clone)]
pub struct DeleteAuthor {
    pub author_id: AuthorId,
}
