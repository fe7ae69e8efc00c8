//! SQLite Book Repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::{map_db_err, DbPool};
use crate::application::ports::{BookRepositoryPort, Page, PageRequest, RepositoryError};
use crate::domain::audit::AuditStamp;
use crate::domain::author::AuthorId;
use crate::domain::book::{Book, BookId};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const BOOK_COLUMNS: &str =
    "id, title, description, isbn, publication_date, author_id, created_at, updated_at";

#[derive(FromRow)]
pub(super) struct BookRow {
    id: i64,
    title: String,
    description: Option<String>,
    isbn: String,
    publication_date: Option<String>,
    author_id: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let publication_date = row
            .publication_date
            .map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Book::hydrate(
            BookId::new(row.id),
            row.title,
            row.description,
            row.isbn,
            publication_date,
            AuthorId::new(row.author_id),
            AuditStamp::restore(created_at, updated_at),
        ))
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn insert(&self, book: &Book) -> Result<BookId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, description, isbn, publication_date, author_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(book.title())
        .bind(book.raw_description())
        .bind(book.isbn())
        .bind(book.raw_publication_date().map(|d| d.to_string()))
        .bind(book.author_id().value())
        .bind(book.stamp().created_at().to_rfc3339())
        .bind(book.stamp().updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        // 主键由存储层分配
        Ok(BookId::new(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> =
            sqlx::query_as(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_err)?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE author_id = ? ORDER BY id"
        ))
        .bind(author_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_page(
        &self,
        page: &PageRequest,
        title_filter: &str,
    ) -> Result<Page<Book>, RepositoryError> {
        // 排序列来自白名单枚举，可以安全拼接
        let order = format!("{} {}", page.sort.column(), page.direction.keyword());

        let (total, rows): (i64, Vec<BookRow>) = if title_filter.is_empty() {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_err)?;

            let rows = sqlx::query_as(&format!(
                "SELECT {BOOK_COLUMNS} FROM books ORDER BY {order} LIMIT ? OFFSET ?"
            ))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

            (total, rows)
        } else {
            // SQLite 的 LIKE 对 ASCII 默认大小写不敏感
            let pattern = format!("%{title_filter}%");

            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE title LIKE ?")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_err)?;

            let rows = sqlx::query_as(&format!(
                "SELECT {BOOK_COLUMNS} FROM books WHERE title LIKE ? ORDER BY {order} LIMIT ? OFFSET ?"
            ))
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

            (total, rows)
        };

        let items: Vec<Book> = rows
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total: total as u64,
        })
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = ?)")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(exists != 0)
    }

    async fn update(&self, id: BookId, book: &Book) -> Result<(), RepositoryError> {
        // isbn 与 author_id 不可变，不写回
        sqlx::query(
            r#"
            UPDATE books
            SET title = ?, description = ?, publication_date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(book.title())
        .bind(book.raw_description())
        .bind(book.raw_publication_date().map(|d| d.to_string()))
        .bind(book.stamp().updated_at().to_rfc3339())
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
