//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者聚合管理
//! - 名下图书为派生查询，不在聚合内维护反向引用

mod aggregate;
mod value_objects;

pub use aggregate::Author;
pub use value_objects::AuthorId;
