//! 请求提取器
//!
//! 把 axum 的提取失败归入错误分类，保持所有失败走同一响应形状：
//! - JSON 语法错误 → 102 ParamFormat
//! - JSON 字段类型不匹配（含日期解析失败）→ 101 InvalidInput
//! - 路径参数类型不匹配 → 101 InvalidInput
//! - 查询串格式错误 → 102 ParamFormat

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::domain::errors::DomainError;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// JSON 请求体提取器
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T> FromRequest<Arc<AppState>> for ApiJson<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                let err = match rejection {
                    JsonRejection::JsonDataError(e) => DomainError::invalid_input(e.body_text()),
                    JsonRejection::JsonSyntaxError(e) => DomainError::param_format(e.body_text()),
                    other => DomainError::param_format(other.body_text()),
                };
                Err(state.responder.respond(err))
            }
        }
    }
}

/// 路径参数提取器
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<Arc<AppState>> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(state
                .responder
                .respond(DomainError::invalid_input(rejection.body_text()))),
        }
    }
}

/// 查询参数提取器
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<Arc<AppState>> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(state
                .responder
                .respond(DomainError::param_format(rejection.body_text()))),
        }
    }
}
