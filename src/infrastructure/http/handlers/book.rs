//! Book HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::ports::PageRequest;
use crate::application::{CreateBook, DeleteBook, GetBookDetail, ListBooks, UpdateBook};
use crate::domain::author::AuthorId;
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{
    BookDetailResponse, BookListParams, BookResponse, CreateBookRequest, CreateBookResponse,
    PageResponse, UpdateBookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::infrastructure::http::state::AppState;

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<CreateBookResponse>), ApiError> {
    request.validate().map_err(|e| state.responder.respond(e))?;

    tracing::info!(isbn = %request.isbn, author_id = request.author_id, "Create book");

    let book_id = state
        .create_book_handler
        .handle(CreateBook {
            title: request.title,
            description: request.description,
            isbn: request.isbn,
            publication_date: request.publication_date,
            author_id: AuthorId::new(request.author_id),
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            id: book_id.value(),
        }),
    ))
}

/// 获取图书列表（分页，可选标题过滤）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<BookListParams>,
) -> Result<Json<PageResponse<BookResponse>>, ApiError> {
    let page = PageRequest::of(
        params.page,
        params.size,
        params.sort.into(),
        params.direction.into(),
    );

    let result = state
        .list_books_handler
        .handle(ListBooks {
            page,
            title: params.title,
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(Json(PageResponse::from(result)))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookDetailResponse>, ApiError> {
    let book = state
        .get_book_detail_handler
        .handle(GetBookDetail {
            book_id: BookId::new(id),
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(Json(BookDetailResponse::from(&book)))
}

/// 修改图书（部分更新）
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateBookRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate().map_err(|e| state.responder.respond(e))?;

    state
        .update_book_handler
        .handle(UpdateBook {
            book_id: BookId::new(id),
            title: request.title,
            description: request.description,
            publication_date: request.publication_date,
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_book_handler
        .handle(DeleteBook {
            book_id: BookId::new(id),
        })
        .await
        .map_err(|e| state.responder.respond(e))?;

    Ok(StatusCode::NO_CONTENT)
}
