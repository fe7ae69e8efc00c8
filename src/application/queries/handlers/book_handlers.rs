//! Book Query Handlers

use std::sync::Arc;

use crate::application::ports::{BookRepositoryPort, Page};
use crate::application::queries::{GetBookDetail, ListBooks};
use crate::domain::book::Book;
use crate::domain::errors::DomainError;

/// GetBookDetail Handler
pub struct GetBookDetailHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookDetailHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBookDetail) -> Result<Book, DomainError> {
        self.book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("bookId[{}] not found", query.book_id))
            })
    }
}

/// ListBooks Handler
///
/// 分页由存储层完成，这里只做转发。
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: ListBooks) -> Result<Page<Book>, DomainError> {
        Ok(self.book_repo.find_page(&query.page, &query.title).await?)
    }
}
