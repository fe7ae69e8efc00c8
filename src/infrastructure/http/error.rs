//! HTTP Error Handling
//!
//! 领域错误在这里统一转换为对外响应：固定的 分类→状态码 映射加上
//! 本地化消息目录查找。错误体字段顺序稳定：error_code 在前。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::errors::{DomainError, ErrorType};
use crate::infrastructure::i18n::{self, Locale};

/// 统一错误响应格式（字段顺序稳定）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_message: String,
}

/// 已完成本地化的 API 错误
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// 边界错误转换器
///
/// 领域失败 + 配置语言 → 状态码 + 本地化错误体。
#[derive(Debug, Clone, Copy)]
pub struct ErrorResponder {
    locale: Locale,
}

impl ErrorResponder {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn respond(&self, err: DomainError) -> ApiError {
        let code = err.error_type.code();

        // ServerError 细节只记录在服务端，对外仅返回通用消息
        let message = match err.error_type {
            ErrorType::ServerError => {
                tracing::error!(error_code = code, detail = %err.detail, "Unclassified server error");
                i18n::localize(self.locale, code, "")
            }
            _ => {
                tracing::warn!(error_code = code, detail = %err.detail, "Domain error");
                i18n::localize(self.locale, code, &err.detail)
            }
        };

        ApiError {
            status: status_for(err.error_type),
            body: ErrorResponse {
                error_code: code.to_string(),
                error_message: message,
            },
        }
    }
}

/// 错误分类到 HTTP 状态码的固定映射（所有操作保持一致）
fn status_for(error_type: ErrorType) -> StatusCode {
    match error_type {
        ErrorType::RequiredInput
        | ErrorType::InvalidInput
        | ErrorType::ParamFormat
        | ErrorType::ExistData
        | ErrorType::Custom => StatusCode::BAD_REQUEST,
        ErrorType::NotExistData => StatusCode::NOT_FOUND,
        ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorType::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
