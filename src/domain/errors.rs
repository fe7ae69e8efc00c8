//! 错误分类 - 稳定错误码
//!
//! 所有领域失败都归入这里的分类，每个分类对应一个固定的三位错误码，
//! 对外响应以该码为准，不随消息文案变化。

use thiserror::Error;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// 必填项为空或缺失（格式本身合法）
    RequiredInput,
    /// 值存在但不符合格式规则（ISBN、日期等）
    InvalidInput,
    /// 请求参数/请求体无法解析为预期形状
    ParamFormat,
    /// 唯一性冲突（邮箱、ISBN 重复）
    ExistData,
    /// 引用的数据不存在
    NotExistData,
    /// 调用方自定义消息，无固定目录条目
    Custom,
    /// 预留，无本地化目录条目
    Unauthorized,
    /// 未分类的内部错误
    ServerError,
}

impl ErrorType {
    /// 稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::RequiredInput => "100",
            ErrorType::InvalidInput => "101",
            ErrorType::ParamFormat => "102",
            ErrorType::ExistData => "103",
            ErrorType::NotExistData => "104",
            ErrorType::Custom => "777",
            ErrorType::Unauthorized => "888",
            ErrorType::ServerError => "999",
        }
    }
}

/// 领域错误
///
/// 携带分类与上下文细节，由编排层原样向上传播，在边界统一转换为响应。
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct DomainError {
    pub error_type: ErrorType,
    pub detail: String,
}

impl DomainError {
    pub fn new(error_type: ErrorType, detail: impl Into<String>) -> Self {
        Self {
            error_type,
            detail: detail.into(),
        }
    }

    pub fn required_input(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::RequiredInput, detail)
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::InvalidInput, detail)
    }

    pub fn param_format(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::ParamFormat, detail)
    }

    pub fn exist_data(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::ExistData, detail)
    }

    pub fn not_exist_data(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::NotExistData, detail)
    }

    pub fn custom(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Custom, detail)
    }

    pub fn server_error(detail: impl Into<String>) -> Self {
        Self::new(ErrorType::ServerError, detail)
    }
}
