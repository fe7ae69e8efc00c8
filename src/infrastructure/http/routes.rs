//! HTTP Routes
//!
//! API Endpoints:
//! - /authors       POST   创建作者
//! - /authors       GET    作者列表（含名下图书，page_size/page_num）
//! - /authors/:id   GET    作者详情
//! - /authors/:id   PATCH  修改作者姓名
//! - /authors/:id   DELETE 删除作者（级联删除名下图书）
//! - /books         POST   创建图书
//! - /books         GET    图书列表（page/size/sort/direction/title）
//! - /books/:id     GET    图书详情
//! - /books/:id     PATCH  修改图书（部分更新）
//! - /books/:id     DELETE 删除图书
//! - /ping          GET    健康检查

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/authors", author_routes())
        .nest("/books", book_routes())
}

/// Author 路由
fn author_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_authors).post(handlers::create_author),
        )
        .route(
            "/:id",
            get(handlers::get_author)
                .patch(handlers::update_author)
                .delete(handlers::delete_author),
        )
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_books).post(handlers::create_book))
        .route(
            "/:id",
            get(handlers::get_book)
                .patch(handlers::update_book)
                .delete(handlers::delete_book),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Locale;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
    };
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn test_app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            Arc::new(SqliteAuthorRepository::new(pool.clone())),
            Arc::new(SqliteBookRepository::new(pool)),
            Locale::En,
        );

        create_routes().with_state(Arc::new(state))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seed_author(app: &Router, email: &str) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/authors",
                json!({"name": "author", "email": email}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_create_author_returns_201_with_id() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/authors",
                json!({"name": "이동엽", "email": "dongyeop@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_400_with_code_103() {
        let app = test_app().await;
        seed_author(&app, "same@example.com").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/authors",
                json!({"name": "second", "email": "same@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "103");
        assert_eq!(
            body["error_message"],
            "data already exists: same@example.com"
        );
    }

    #[tokio::test]
    async fn test_blank_author_name_returns_400_with_code_101() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/authors",
                json!({"name": " ", "email": "a@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error_code"], "101");
    }

    #[tokio::test]
    async fn test_get_missing_author_returns_404_with_code_104() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("GET", "/authors/99")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "104");
        assert_eq!(
            body["error_message"],
            "data does not exist: authorId[99] not found"
        );
    }

    #[tokio::test]
    async fn test_update_author_blank_name_returns_400_with_code_100() {
        let app = test_app().await;
        let id = seed_author(&app, "u@example.com").await;

        let response = app
            .oneshot(json_request(
                "PATCH",
                &format!("/authors/{id}"),
                json!({"name": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error_code"], "100");
    }

    #[tokio::test]
    async fn test_update_author_returns_204() {
        let app = test_app().await;
        let id = seed_author(&app, "u2@example.com").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/authors/{id}"),
                json!({"name": "renamed"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let detail = app
            .oneshot(empty_request("GET", &format!("/authors/{id}")))
            .await
            .unwrap();
        assert_eq!(body_json(detail).await["name"], "renamed");
    }

    #[tokio::test]
    async fn test_author_cascade_delete_flow() {
        let app = test_app().await;
        let author_id = seed_author(&app, "cascade@example.com").await;

        // 名下两本图书
        for isbn in ["123-456789-0", "124-456789-0"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/books",
                    json!({"title": "t", "isbn": isbn, "author_id": author_id}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/authors/{author_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // 作者与名下图书都被删除
        let author = app
            .clone()
            .oneshot(empty_request("GET", &format!("/authors/{author_id}")))
            .await
            .unwrap();
        assert_eq!(author.status(), StatusCode::NOT_FOUND);

        let books = app
            .clone()
            .oneshot(empty_request("GET", "/books"))
            .await
            .unwrap();
        assert_eq!(body_json(books).await["total_elements"], 0);
    }

    #[tokio::test]
    async fn test_create_book_with_invalid_isbn_returns_400_with_code_101() {
        let app = test_app().await;
        let author_id = seed_author(&app, "b@example.com").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/books",
                json!({"title": "t", "isbn": "100-568901-1", "author_id": author_id}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "101");
        assert_eq!(
            body["error_message"],
            "invalid input: isbn-10 checksum digit must be 0"
        );
    }

    #[tokio::test]
    async fn test_create_book_with_missing_author_returns_404() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/books",
                json!({"title": "t", "isbn": "123-456789-0", "author_id": 42}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error_code"], "104");
    }

    #[tokio::test]
    async fn test_book_detail_exposes_read_fallbacks() {
        let app = test_app().await;
        let author_id = seed_author(&app, "d@example.com").await;

        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/books",
                json!({"title": "t", "isbn": "123-456789-0", "author_id": author_id}),
            ))
            .await
            .unwrap();
        let book_id = body_json(created).await["id"].as_i64().unwrap();

        let response = app
            .oneshot(empty_request("GET", &format!("/books/{book_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        // 缺省描述为空串，缺省出版日期为当天（读取时计算）
        assert_eq!(body["description"], "");
        assert_eq!(
            body["publication_date"],
            chrono::Local::now().date_naive().to_string()
        );
        assert_eq!(body["isbn"], "123-456789-0");
        assert_eq!(body["author_id"], author_id);
    }

    #[tokio::test]
    async fn test_list_books_filters_by_title() {
        let app = test_app().await;
        let author_id = seed_author(&app, "f@example.com").await;

        for (i, title) in ["Rust in Action", "the rust book", "Demian"].iter().enumerate() {
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/books",
                    json!({"title": title, "isbn": format!("12{i}-456789-0"), "author_id": author_id}),
                ))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(empty_request("GET", "/books?title=RUST&size=10"))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["total_elements"], 2);
        assert_eq!(body["content"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_code_102() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/authors")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error_code"], "102");
    }

    #[tokio::test]
    async fn test_bad_date_format_returns_code_101() {
        let app = test_app().await;
        let author_id = seed_author(&app, "date@example.com").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/books",
                json!({
                    "title": "t",
                    "isbn": "123-456789-0",
                    "publication_date": "2024/01/01",
                    "author_id": author_id
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error_code"], "101");
    }

    #[tokio::test]
    async fn test_non_numeric_path_id_returns_code_101() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("GET", "/authors/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error_code"], "101");
    }

    #[tokio::test]
    async fn test_update_book_partial_returns_204() {
        let app = test_app().await;
        let author_id = seed_author(&app, "p@example.com").await;

        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/books",
                json!({
                    "title": "before",
                    "description": "desc",
                    "isbn": "123-456789-0",
                    "publication_date": "2020-05-05",
                    "author_id": author_id
                }),
            ))
            .await
            .unwrap();
        let book_id = body_json(created).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/books/{book_id}"),
                json!({"title": "after"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let detail = app
            .oneshot(empty_request("GET", &format!("/books/{book_id}")))
            .await
            .unwrap();
        let body = body_json(detail).await;
        assert_eq!(body["title"], "after");
        // 未提交的字段保持原值
        assert_eq!(body["description"], "desc");
        assert_eq!(body["publication_date"], "2020-05-05");
    }

    #[tokio::test]
    async fn test_delete_missing_book_returns_404() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("DELETE", "/books/7")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "104");
        assert_eq!(
            body["error_message"],
            "data does not exist: bookId[7] not found"
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("GET", "/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
