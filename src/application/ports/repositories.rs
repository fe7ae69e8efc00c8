//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）
//!
//! 唯一性约束的真正权威在存储层：端口上的 exists_by_* 仅用于快速失败，
//! 插入时的唯一索引冲突由实现映射为 [`RepositoryError::Duplicate`]。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::author::{Author, AuthorId};
use crate::domain::book::{Book, BookId};
use crate::domain::errors::DomainError;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 存储层唯一约束兜底：与服务层预检映射到同一错误分类
            RepositoryError::Duplicate(msg) => DomainError::exist_data(msg),
            other => DomainError::server_error(other.to_string()),
        }
    }
}

// ============================================================================
// 分页
// ============================================================================

/// 可用的排序字段（白名单，防止拼接任意列名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    PublicationDate,
    CreatedAt,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::PublicationDate => "publication_date",
            SortField::CreatedAt => "created_at",
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// 分页请求（页码从 0 开始）
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn of(page: u32, size: u32, sort: SortField, direction: SortDirection) -> Self {
        Self {
            page,
            size,
            sort,
            direction,
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// 一页数据及总量
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(u64::from(self.size))
        }
    }
}

// ============================================================================
// Author Repository
// ============================================================================

/// 作者及其名下图书（读取模型）
///
/// 图书列表按 author_id 派生查询得到，聚合内不维护反向引用。
#[derive(Debug, Clone)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 插入新作者，返回存储层分配的主键
    async fn insert(&self, author: &Author) -> Result<AuthorId, RepositoryError>;

    /// 根据 ID 查找作者
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError>;

    /// 分页获取作者列表，名下图书一并加载（避免逐作者补查）
    ///
    /// 排序固定为 id 升序。
    async fn find_page_with_books(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<AuthorWithBooks>, RepositoryError>;

    /// 邮箱是否已被占用（快速失败预检）
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// 更新作者（仅姓名与更新时间，email 不可变）
    async fn update(&self, id: AuthorId, author: &Author) -> Result<(), RepositoryError>;

    /// 删除作者及其名下全部图书
    ///
    /// 两步删除必须在同一事务内完成，禁止出现部分删除。
    async fn delete_with_books(&self, id: AuthorId) -> Result<(), RepositoryError>;
}

// ============================================================================
// Book Repository
// ============================================================================

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 插入新图书，返回存储层分配的主键
    async fn insert(&self, book: &Book) -> Result<BookId, RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 获取指定作者名下的全部图书
    async fn find_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, RepositoryError>;

    /// 分页获取图书
    ///
    /// title_filter 非空时按标题大小写不敏感的包含匹配过滤。
    async fn find_page(
        &self,
        page: &PageRequest,
        title_filter: &str,
    ) -> Result<Page<Book>, RepositoryError>;

    /// ISBN 是否已被占用（快速失败预检）
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError>;

    /// 更新图书（标题、描述、出版日期与更新时间）
    async fn update(&self, id: BookId, book: &Book) -> Result<(), RepositoryError>;

    /// 删除图书
    async fn delete(&self, id: BookId) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorType;

    #[test]
    fn test_page_request_offset() {
        let page = PageRequest::of(0, 10, SortField::Id, SortDirection::Desc);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);

        let page = PageRequest::of(3, 25, SortField::Title, SortDirection::Asc);
        assert_eq!(page.offset(), 75);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn test_page_total_pages() {
        let page = Page::<u8> {
            items: Vec::new(),
            page: 0,
            size: 10,
            total: 31,
        };
        assert_eq!(page.total_pages(), 4);

        let exact = Page::<u8> {
            items: Vec::new(),
            page: 0,
            size: 10,
            total: 30,
        };
        assert_eq!(exact.total_pages(), 3);
    }

    #[test]
    fn test_duplicate_maps_to_exist_data() {
        let err: DomainError = RepositoryError::Duplicate("books.isbn".to_string()).into();
        assert_eq!(err.error_type, ErrorType::ExistData);

        let err: DomainError = RepositoryError::DatabaseError("disk io".to_string()).into();
        assert_eq!(err.error_type, ErrorType::ServerError);
    }
}
