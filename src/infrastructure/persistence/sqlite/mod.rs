//! SQLite Persistence

mod author_repo;
mod book_repo;
mod database;

pub use author_repo::SqliteAuthorRepository;
pub use book_repo::SqliteBookRepository;
pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};

use crate::application::ports::RepositoryError;

/// sqlx 错误归类
///
/// 唯一索引冲突必须映射为 Duplicate，供上层兜底为 ExistData。
pub(crate) fn map_db_err(e: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::Duplicate(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(e.to_string())
}
