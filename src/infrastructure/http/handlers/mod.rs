//! HTTP Handlers

mod author;
mod book;
mod ping;

pub use author::{create_author, delete_author, get_author, list_authors, update_author};
pub use book::{create_book, delete_book, get_book, list_books, update_book};
pub use ping::ping;
