//! Infrastructure Layer - 基础设施层
//!
//! - http: RESTful API（axum）
//! - i18n: 错误消息多语言目录
//! - persistence: SQLite 存储

pub mod http;
pub mod i18n;
pub mod persistence;
