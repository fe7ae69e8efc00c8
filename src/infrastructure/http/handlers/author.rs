//! Author HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::{CreateAuthor, DeleteAuthor, GetAuthorDetail, ListAuthors, UpdateAuthor};
use crate::domain::author::AuthorId;
use crate::infrastructure::http::dto::{
    AuthorDetailResponse, AuthorListParams, AuthorListResponse, CreateAuthorRequest,
    CreateAuthorResponse, UpdateAuthorRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::infrastructure::http::state::AppState;

/// 创建作者
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<CreateAuthorResponse>), ApiError> {
    request.validate().map_err(|e| state.responder.respond(e))?;

    tracing::info!(email = %request.email, "Create author");

    let author_id = state
        .create_author_handler
        .handle(CreateAuthor {
            name: request.name,
            email: request.email,
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAuthorResponse {
            id: author_id.value(),
        }),
    ))
}

/// 获取作者列表（含名下图书）
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<AuthorListParams>,
) -> Result<Json<Vec<AuthorListResponse>>, ApiError> {
    let authors = state
        .list_authors_handler
        .handle(ListAuthors {
            page_num: params.page_num,
            page_size: params.page_size,
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(Json(authors.iter().map(AuthorListResponse::from).collect()))
}

/// 获取作者详情
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AuthorDetailResponse>, ApiError> {
    let detail = state
        .get_author_detail_handler
        .handle(GetAuthorDetail {
            author_id: AuthorId::new(id),
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(Json(AuthorDetailResponse::from(&detail)))
}

/// 修改作者姓名
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateAuthorRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .update_author_handler
        .handle(UpdateAuthor {
            author_id: AuthorId::new(id),
            name: request.name,
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// 删除作者（级联删除名下图书）
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_author_handler
        .handle(DeleteAuthor {
            author_id: AuthorId::new(id),
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(StatusCode::NO_CONTENT)
}
