//! HTTP - RESTful API
//!
//! - dto: 请求/响应体与边界校验
//! - extract: 提取失败到错误分类的归类
//! - error: ErrorResponder（分类→状态码 + 本地化消息）
//! - handlers: 各资源的处理函数
//! - routes/server/state: 路由、服务器与应用状态

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponder, ErrorResponse};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
