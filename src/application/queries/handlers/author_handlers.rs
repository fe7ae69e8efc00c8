//! Author Query Handlers

use std::sync::Arc;

use crate::application::ports::{
    AuthorRepositoryPort, AuthorWithBooks, BookRepositoryPort, PageRequest, SortDirection,
    SortField,
};
use crate::application::queries::{GetAuthorDetail, ListAuthors};
use crate::domain::errors::DomainError;

/// GetAuthorDetail Handler
pub struct GetAuthorDetailHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetAuthorDetailHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    pub async fn handle(&self, query: GetAuthorDetail) -> Result<AuthorWithBooks, DomainError> {
        let author = self
            .author_repo
            .find_by_id(query.author_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("authorId[{}] not found", query.author_id))
            })?;

        // 名下图书为派生查询，不在聚合内维护
        let books = self.book_repo.find_by_author(query.author_id).await?;

        Ok(AuthorWithBooks { author, books })
    }
}

/// ListAuthors Handler
///
/// 作者列表连同名下图书一并加载，排序固定为 id 升序。
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, query: ListAuthors) -> Result<Vec<AuthorWithBooks>, DomainError> {
        let page = PageRequest::of(
            query.page_num,
            query.page_size,
            SortField::Id,
            SortDirection::Asc,
        );

        Ok(self.author_repo.find_page_with_books(&page).await?)
    }
}
