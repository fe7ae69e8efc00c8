//! Command Handlers

mod author_handlers;
mod book_handlers;

pub use author_handlers::{CreateAuthorHandler, DeleteAuthorHandler, UpdateAuthorHandler};
pub use book_handlers::{CreateBookHandler, DeleteBookHandler, UpdateBookHandler};
