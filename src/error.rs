use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// 接口错误类型
///
/// 对应请求处理的三类失败（外加存储读取故障的兜底），
/// 所有错误响应统一为 {success: false, error: 状态码, message: 文本}。
#[derive(Debug)]
pub enum ApiError {
    /// 请求缺少必要字段或字段非法（调用方的错，不可重试）
    BadRequest {
        detail: String,
    },
    /// 目标实体不存在，或计算出的结果页为空
    NotFound,
    /// 请求合法且目标存在，但存储层无法完成破坏性操作
    Unprocessable {
        detail: String,
    },
    /// 读取路径上的存储故障
    Internal {
        detail: String,
    },
}

impl ApiError {
    /// 创建 BadRequest 错误
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::BadRequest {
            detail: detail.into(),
        }
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 响应体中的 message 字段，按错误类别固定
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "Bad request",
            ApiError::NotFound => "Not found",
            ApiError::Unprocessable { .. } => "Unprocessable entity",
            ApiError::Internal { .. } => "Internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { detail } => write!(f, "请求参数错误: {}", detail),
            ApiError::NotFound => write!(f, "资源不存在"),
            ApiError::Unprocessable { detail } => write!(f, "操作无法完成: {}", detail),
            ApiError::Internal { detail } => write!(f, "存储故障: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

/// 存储读取故障统一映射为 500，删除路径的 422 由编排层单独处理
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("请求处理失败: {}", self);
        } else {
            tracing::debug!("请求被拒绝: {}", self);
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

/// 接口结果类型
pub type ApiResult<T> = Result<T, ApiError>;
