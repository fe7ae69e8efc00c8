//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::ports::{AuthorRepositoryPort, BookRepositoryPort, RepositoryError};
use crate::domain::book::{Book, BookId};
use crate::domain::errors::DomainError;

/// CreateBook Handler
///
/// 编排顺序：ISBN 占用预检 → 解析所属作者 → 构造聚合（ISBN 格式校验）
/// → 插入（唯一索引冲突兜底为 ExistData）。
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            book_repo,
            author_repo,
        }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookId, DomainError> {
        if self.book_repo.exists_by_isbn(&command.isbn).await? {
            return Err(DomainError::exist_data(format!(
                "isbn[{}] is already exist",
                command.isbn
            )));
        }

        let author = self
            .author_repo
            .find_by_id(command.author_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("authorId[{}] not found", command.author_id))
            })?;
        tracing::debug!(author = %author.name(), "Resolved book owner");

        let book = Book::new(
            command.title,
            command.description,
            command.isbn.clone(),
            command.publication_date,
            command.author_id,
        )?;

        let book_id = self.book_repo.insert(&book).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                DomainError::exist_data(format!("isbn[{}] is already exist", command.isbn))
            }
            other => other.into(),
        })?;

        tracing::info!(
            book_id = %book_id,
            isbn = %command.isbn,
            author_id = %command.author_id,
            "Book created"
        );

        Ok(book_id)
    }
}

/// UpdateBook Handler
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<(), DomainError> {
        let mut book = self
            .book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("bookId[{}] not found", command.book_id))
            })?;

        book.update(
            command.title.as_deref(),
            command.description.as_deref(),
            command.publication_date,
        );

        self.book_repo.update(command.book_id, &book).await?;

        tracing::info!(book_id = %command.book_id, "Book updated");

        Ok(())
    }
}

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), DomainError> {
        // 先解析，让不存在的 ID 以 NotExistData 暴露而不是静默成功
        self.book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("bookId[{}] not found", command.book_id))
            })?;

        self.book_repo.delete(command.book_id).await?;

        tracing::info!(book_id = %command.book_id, "Book deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::CreateAuthorHandler;
    use crate::application::commands::CreateAuthor;
    use crate::domain::author::AuthorId;
    use crate::domain::errors::ErrorType;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
    };
    use chrono::NaiveDate;

    async fn repos() -> (Arc<dyn AuthorRepositoryPort>, Arc<dyn BookRepositoryPort>) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (
            Arc::new(SqliteAuthorRepository::new(pool.clone())),
            Arc::new(SqliteBookRepository::new(pool)),
        )
    }

    async fn seeded_author(author_repo: &Arc<dyn AuthorRepositoryPort>) -> AuthorId {
        CreateAuthorHandler::new(author_repo.clone())
            .handle(CreateAuthor {
                name: "헤르만 헤세".to_string(),
                email: "hesse@example.com".to_string(),
            })
            .await
            .unwrap()
    }

    fn create_command(isbn: &str, author_id: AuthorId) -> CreateBook {
        CreateBook {
            title: "데미안".to_string(),
            description: None,
            isbn: isbn.to_string(),
            publication_date: NaiveDate::from_ymd_opt(1919, 6, 1),
            author_id,
        }
    }

    #[tokio::test]
    async fn test_create_book() {
        let (author_repo, book_repo) = repos().await;
        let author_id = seeded_author(&author_repo).await;
        let handler = CreateBookHandler::new(book_repo.clone(), author_repo);

        let id = handler
            .handle(create_command("123-456789-0", author_id))
            .await
            .unwrap();

        let book = book_repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(book.isbn(), "123-456789-0");
        assert_eq!(book.author_id(), author_id);
    }

    #[tokio::test]
    async fn test_create_book_with_taken_isbn_fails() {
        let (author_repo, book_repo) = repos().await;
        let author_id = seeded_author(&author_repo).await;
        let handler = CreateBookHandler::new(book_repo, author_repo);

        handler
            .handle(create_command("123-456789-0", author_id))
            .await
            .unwrap();

        let err = handler
            .handle(create_command("123-456789-0", author_id))
            .await
            .unwrap_err();

        assert_eq!(err.error_type, ErrorType::ExistData);
        assert_eq!(err.detail, "isbn[123-456789-0] is already exist");
    }

    #[tokio::test]
    async fn test_create_book_with_missing_author_fails() {
        let (author_repo, book_repo) = repos().await;
        let handler = CreateBookHandler::new(book_repo, author_repo);

        let err = handler
            .handle(create_command("123-456789-0", AuthorId::new(99)))
            .await
            .unwrap_err();

        assert_eq!(err.error_type, ErrorType::NotExistData);
        assert_eq!(err.detail, "authorId[99] not found");
    }

    #[tokio::test]
    async fn test_create_book_with_invalid_isbn_fails() {
        let (author_repo, book_repo) = repos().await;
        let author_id = seeded_author(&author_repo).await;
        let handler = CreateBookHandler::new(book_repo, author_repo);

        let err = handler
            .handle(create_command("100-568901-1", author_id))
            .await
            .unwrap_err();

        assert_eq!(err.error_type, ErrorType::InvalidInput);
    }

    #[tokio::test]
    async fn test_update_book_partial_semantics() {
        let (author_repo, book_repo) = repos().await;
        let author_id = seeded_author(&author_repo).await;
        let create = CreateBookHandler::new(book_repo.clone(), author_repo);
        let update = UpdateBookHandler::new(book_repo.clone());

        let id = create
            .handle(create_command("123-456789-0", author_id))
            .await
            .unwrap();

        // 只改标题，其他字段保持原值
        update
            .handle(UpdateBook {
                book_id: id,
                title: Some("수레바퀴 아래서".to_string()),
                description: None,
                publication_date: None,
            })
            .await
            .unwrap();

        let book = book_repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(book.title(), "수레바퀴 아래서");
        assert_eq!(
            book.raw_publication_date(),
            NaiveDate::from_ymd_opt(1919, 6, 1)
        );
    }

    #[tokio::test]
    async fn test_delete_missing_book_is_not_exist_data() {
        let (_, book_repo) = repos().await;
        let delete = DeleteBookHandler::new(book_repo);

        let err = delete
            .handle(DeleteBook {
                book_id: BookId::new(5),
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_type, ErrorType::NotExistData);
        assert_eq!(err.detail, "bookId[5] not found");
    }
}
