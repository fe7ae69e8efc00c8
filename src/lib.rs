//! Libro - 作者与图书目录服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Author Context: 作者管理上下文
//! - Book Context: 图书管理上下文（ISBN-10 构造期校验、部分更新语义）
//! - errors: 稳定错误码分类
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Author/Book Repository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 边界错误转换
//! - I18n: 错误消息多语言目录
//! - Persistence: SQLite 存储（唯一索引为重复数据的最终权威）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
