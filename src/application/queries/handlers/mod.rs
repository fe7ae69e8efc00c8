//! Query Handlers

mod author_handlers;
mod book_handlers;

pub use author_handlers::{GetAuthorDetailHandler, ListAuthorsHandler};
pub use book_handlers::{GetBookDetailHandler, ListBooksHandler};
