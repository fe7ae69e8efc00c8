//! SQLite Author Repository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::book_repo::BookRow;
use super::{map_db_err, DbPool};
use crate::application::ports::{
    AuthorRepositoryPort, AuthorWithBooks, PageRequest, RepositoryError,
};
use crate::domain::audit::AuditStamp;
use crate::domain::author::{Author, AuthorId};
use crate::domain::book::Book;

/// SQLite Author Repository
pub struct SqliteAuthorRepository {
    pool: DbPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    email: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = RepositoryError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Author::hydrate(
            AuthorId::new(row.id),
            row.name,
            row.email,
            AuditStamp::restore(created_at, updated_at),
        ))
    }
}

#[async_trait]
impl AuthorRepositoryPort for SqliteAuthorRepository {
    async fn insert(&self, author: &Author) -> Result<AuthorId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO authors (name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(author.name())
        .bind(author.email())
        .bind(author.stamp().created_at().to_rfc3339())
        .bind(author.stamp().updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        // 主键由存储层分配
        Ok(AuthorId::new(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            "SELECT id, name, email, created_at, updated_at FROM authors WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_page_with_books(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<AuthorWithBooks>, RepositoryError> {
        let rows: Vec<AuthorRow> = sqlx::query_as(
            "SELECT id, name, email, created_at, updated_at FROM authors ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        let authors: Vec<Author> = rows
            .into_iter()
            .map(Author::try_from)
            .collect::<Result<_, _>>()?;

        if authors.is_empty() {
            return Ok(Vec::new());
        }

        // 名下图书一次性批量加载，避免逐作者补查
        let placeholders: Vec<&str> = authors.iter().map(|_| "?").collect();
        let query = format!(
            "SELECT id, title, description, isbn, publication_date, author_id, created_at, updated_at \
             FROM books WHERE author_id IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, BookRow>(&query);
        for author in &authors {
            // find_page_with_books 只返回已持久化的作者，id 必定存在
            let id = author.id().map(|id| id.value()).unwrap_or_default();
            sql_query = sql_query.bind(id);
        }

        let book_rows: Vec<BookRow> = sql_query.fetch_all(&self.pool).await.map_err(map_db_err)?;

        let mut books_by_author: HashMap<i64, Vec<Book>> = HashMap::new();
        for row in book_rows {
            let book = Book::try_from(row)?;
            books_by_author
                .entry(book.author_id().value())
                .or_default()
                .push(book);
        }

        Ok(authors
            .into_iter()
            .map(|author| {
                let books = author
                    .id()
                    .and_then(|id| books_by_author.remove(&id.value()))
                    .unwrap_or_default();
                AuthorWithBooks { author, books }
            })
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_err)?;

        Ok(exists != 0)
    }

    async fn update(&self, id: AuthorId, author: &Author) -> Result<(), RepositoryError> {
        // email 创建后不可变，这里只写回姓名与更新时间
        sqlx::query("UPDATE authors SET name = ?, updated_at = ? WHERE id = ?")
            .bind(author.name())
            .bind(author.stamp().updated_at().to_rfc3339())
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_with_books(&self, id: AuthorId) -> Result<(), RepositoryError> {
        // 使用事务确保原子性：图书与作者要么一起删除，要么都不删除
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        // 删除名下图书
        sqlx::query("DELETE FROM books WHERE author_id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        // 删除作者
        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}
