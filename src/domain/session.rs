// ==========================================
// 成衣产线跟踪系统 - 会话上下文
// ==========================================
// 会话由调用方显式传入 API 层；引擎层完全不感知会话
// 生命周期: 登录时创建，登出时丢弃
// ==========================================

use crate::domain::types::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: &str, username: &str, role: Role) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.to_string(),
            role,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_login_payload() {
        let raw = r#"{"user_id": "u-9", "username": "rosa", "role": "SUPERVISOR"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert!(session.has_role(Role::Supervisor));

        let raw = r#"{"user_id": "u-9", "username": "rosa", "role": "guest"}"#;
        assert!(serde_json::from_str::<Session>(raw).is_err());
    }
}
