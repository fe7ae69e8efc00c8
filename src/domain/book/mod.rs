//! Book Context - 图书限界上下文
//!
//! 职责:
//! - 图书聚合管理
//! - ISBN-10 构造期校验
//! - 部分更新语义（空值/空白视为不修改）

mod aggregate;
mod value_objects;

pub use aggregate::Book;
pub use value_objects::BookId;
