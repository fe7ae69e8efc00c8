//! Data Transfer Objects
//!
//! 请求体/响应体定义及请求边界校验。格式检查（空白、邮箱形状、
//! 未来日期）在这里完成，聚合内不再重复。

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthorWithBooks, Page, SortDirection, SortField};
use crate::domain::book::Book;
use crate::domain::errors::DomainError;

// ============================================================================
// Author DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub email: String,
}

impl CreateAuthorRequest {
    /// 入参边界校验
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name : must not be blank"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::invalid_input("email : must not be blank"));
        }
        if !is_well_formed_email(&self.email) {
            return Err(DomainError::invalid_input(
                "email : must be a well-formed email address",
            ));
        }
        Ok(())
    }
}

/// 邮箱形状检查：本地部分 @ 含点的域名部分
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    /// 空白或缺失由聚合判定为 RequiredInput
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAuthorResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct AuthorListResponse {
    pub name: String,
    pub email: String,
    pub books: Vec<BookResponse>,
}

impl From<&AuthorWithBooks> for AuthorListResponse {
    fn from(entry: &AuthorWithBooks) -> Self {
        Self {
            name: entry.author.name().to_string(),
            email: entry.author.email().to_string(),
            books: entry.books.iter().map(BookResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorDetailResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub books: Vec<BookResponse>,
}

impl From<&AuthorWithBooks> for AuthorDetailResponse {
    fn from(entry: &AuthorWithBooks) -> Self {
        Self {
            id: entry.author.id().map(|id| id.value()).unwrap_or_default(),
            name: entry.author.name().to_string(),
            email: entry.author.email().to_string(),
            books: entry.books.iter().map(BookResponse::from).collect(),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub publication_date: Option<NaiveDate>,
    pub author_id: i64,
}

impl CreateBookRequest {
    /// 入参边界校验（ISBN 格式由 Book 构造统一校验，这里不分叉规则）
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::invalid_input("title : must not be blank"));
        }
        if self.isbn.trim().is_empty() {
            return Err(DomainError::invalid_input("isbn : must not be blank"));
        }
        validate_not_future(self.publication_date)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<NaiveDate>,
}

impl UpdateBookRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_not_future(self.publication_date)
    }
}

/// 出版日期不得晚于当天
fn validate_not_future(date: Option<NaiveDate>) -> Result<(), DomainError> {
    if let Some(date) = date {
        if date > Local::now().date_naive() {
            return Err(DomainError::invalid_input(
                "publication_date : must not be a future date",
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    pub id: i64,
}

/// 图书摘要（作者视图与列表共用）
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub publication_date: NaiveDate,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().map(|id| id.value()).unwrap_or_default(),
            title: book.title().to_string(),
            // 读取访问器：缺省描述为空串，缺省出版日期为当天
            description: book.description().to_string(),
            publication_date: book.publication_date(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub isbn: String,
    pub publication_date: NaiveDate,
    pub author_id: i64,
}

impl From<&Book> for BookDetailResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().map(|id| id.value()).unwrap_or_default(),
            title: book.title().to_string(),
            description: book.description().to_string(),
            isbn: book.isbn().to_string(),
            publication_date: book.publication_date(),
            author_id: book.author_id().value(),
        }
    }
}

/// 分页响应
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Book>> for PageResponse<BookResponse> {
    fn from(page: Page<Book>) -> Self {
        Self {
            content: page.items.iter().map(BookResponse::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total,
            total_pages: page.total_pages(),
        }
    }
}

// ============================================================================
// 列表查询参数
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AuthorListParams {
    #[serde(default = "default_author_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub page_num: u32,
}

fn default_author_page_size() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
pub struct BookListParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_book_page_size")]
    pub size: u32,
    #[serde(default)]
    pub sort: SortParam,
    #[serde(default)]
    pub direction: DirectionParam,
    #[serde(default)]
    pub title: String,
}

fn default_book_page_size() -> u32 {
    10
}

/// 排序字段参数（白名单）
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortParam {
    #[default]
    Id,
    Title,
    PublicationDate,
    CreatedAt,
}

impl From<SortParam> for SortField {
    fn from(param: SortParam) -> Self {
        match param {
            SortParam::Id => SortField::Id,
            SortParam::Title => SortField::Title,
            SortParam::PublicationDate => SortField::PublicationDate,
            SortParam::CreatedAt => SortField::CreatedAt,
        }
    }
}

/// 排序方向参数
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionParam {
    Asc,
    #[default]
    Desc,
}

impl From<DirectionParam> for SortDirection {
    fn from(param: DirectionParam) -> Self {
        match param {
            DirectionParam::Asc => SortDirection::Asc,
            DirectionParam::Desc => SortDirection::Desc,
        }
    }
}
