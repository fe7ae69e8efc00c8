//! Application State
//!
//! 持有端口、全部 Command/Query Handlers 以及边界错误转换器。

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateAuthorHandler, CreateBookHandler, DeleteAuthorHandler, DeleteBookHandler,
    UpdateAuthorHandler, UpdateBookHandler,
    // Query handlers
    GetAuthorDetailHandler, GetBookDetailHandler, ListAuthorsHandler, ListBooksHandler,
    // Ports
    AuthorRepositoryPort, BookRepositoryPort,
};
use crate::infrastructure::http::error::ErrorResponder;
use crate::infrastructure::i18n::Locale;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub author_repo: Arc<dyn AuthorRepositoryPort>,
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== 边界错误转换 ==========
    pub responder: ErrorResponder,

    // ========== Command Handlers ==========
    pub create_author_handler: CreateAuthorHandler,
    pub update_author_handler: UpdateAuthorHandler,
    pub delete_author_handler: DeleteAuthorHandler,
    pub create_book_handler: CreateBookHandler,
    pub update_book_handler: UpdateBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_author_detail_handler: GetAuthorDetailHandler,
    pub list_authors_handler: ListAuthorsHandler,
    pub get_book_detail_handler: GetBookDetailHandler,
    pub list_books_handler: ListBooksHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
        locale: Locale,
    ) -> Self {
        Self {
            // Ports
            author_repo: author_repo.clone(),
            book_repo: book_repo.clone(),

            responder: ErrorResponder::new(locale),

            // Command handlers
            create_author_handler: CreateAuthorHandler::new(author_repo.clone()),
            update_author_handler: UpdateAuthorHandler::new(author_repo.clone()),
            delete_author_handler: DeleteAuthorHandler::new(author_repo.clone()),
            create_book_handler: CreateBookHandler::new(book_repo.clone(), author_repo.clone()),
            update_book_handler: UpdateBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            // Query handlers
            get_author_detail_handler: GetAuthorDetailHandler::new(
                author_repo.clone(),
                book_repo.clone(),
            ),
            list_authors_handler: ListAuthorsHandler::new(author_repo),
            get_book_detail_handler: GetBookDetailHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(book_repo),
        }
    }
}
