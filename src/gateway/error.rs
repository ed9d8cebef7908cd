// ==========================================
// 成衣产线跟踪系统 - 后端网关错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: Unavailable 为可重试错误（网络/后端暂不可用）
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("后端暂不可用: {0}")]
    Unavailable(String),

    #[error("后端拒绝请求: {0}")]
    Rejected(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        GatewayError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// 是否值得提示用户重试
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Unavailable(_))
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
