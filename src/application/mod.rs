//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Author/Book Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//!
//! 编排方法只负责预检、解析聚合、调用聚合自身的变更规则并持久化；
//! 领域失败（DomainError）原样向上传播，由 HTTP 边界统一转换。

pub mod commands;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Author commands
    CreateAuthor,
    DeleteAuthor,
    UpdateAuthor,
    // Book commands
    CreateBook,
    DeleteBook,
    UpdateBook,
    // Handlers
    handlers::{
        CreateAuthorHandler, CreateBookHandler, DeleteAuthorHandler, DeleteBookHandler,
        UpdateAuthorHandler, UpdateBookHandler,
    },
};

pub use ports::{
    AuthorRepositoryPort, AuthorWithBooks, BookRepositoryPort, Page, PageRequest, RepositoryError,
    SortDirection, SortField,
};

pub use queries::{
    // Author queries
    GetAuthorDetail,
    ListAuthors,
    // Book queries
    GetBookDetail,
    ListBooks,
    // Handlers
    handlers::{GetAuthorDetailHandler, GetBookDetailHandler, ListAuthorsHandler, ListBooksHandler},
};
