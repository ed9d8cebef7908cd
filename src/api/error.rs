// ==========================================
// 成衣产线跟踪系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换网关/配置错误为用户可理解的错误
// 说明: 引擎层不报错；只有会话、保存前置条件与 I/O 会失败
// ==========================================

use crate::config::planner_config::ConfigError;
use crate::domain::types::Role;
use crate::gateway::error::GatewayError;
use crate::i18n::t;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入与权限
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 目标为 0 或运行标识缺失，不允许保存
    #[error("输入不足: {0}")]
    InsufficientInput(String),

    #[error("权限不足: 需要角色 {required}, 当前角色 {actual}")]
    PermissionDenied { required: Role, actual: Role },

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 外部依赖
    // ==========================================
    #[error("后端错误: {0}")]
    Gateway(GatewayError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否可提示用户重试（后端暂不可用）
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Gateway(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// 面向最终用户的本地化提示
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InsufficientInput(_) => t("planner.insufficient_input"),
            ApiError::PermissionDenied { .. } => t("error.permission_denied"),
            e if e.is_retryable() => t("error.retry"),
            e => e.to_string(),
        }
    }
}

// ==========================================
// 从 GatewayError 转换
// 目的: NotFound 上提为 API 层 NotFound，其余保留原始错误
// ==========================================
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            GatewayError::Other(err) => ApiError::Other(err),
            other => ApiError::Gateway(other),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
