// ==========================================
// 成衣产线跟踪系统 - API 前置校验
// ==========================================
// 职责: 会话角色校验、保存前置条件、分配数量校验
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::balancing::BalancingAssignment;
use crate::domain::header::HeaderInput;
use crate::domain::session::Session;
use crate::domain::types::Role;
use tracing::warn;

/// 要求会话具有指定角色
pub fn require_role(session: &Session, required: Role) -> ApiResult<()> {
    if session.has_role(required) {
        Ok(())
    } else {
        warn!(
            user = %session.username,
            required = %required,
            actual = %session.role,
            "角色校验未通过"
        );
        Err(ApiError::PermissionDenied {
            required,
            actual: session.role,
        })
    }
}

/// 保存前置条件: 产线号/日期已填写且目标 > 0
pub fn ensure_savable(header: &HeaderInput, target: f64) -> ApiResult<()> {
    if !header.has_run_identity() {
        return Err(ApiError::InsufficientInput("line/date 未填写".to_string()));
    }
    if !(target > 0.0) {
        return Err(ApiError::InsufficientInput(format!(
            "目标为 0 (operators/workingHours/sam 无效): target={}",
            target
        )));
    }
    Ok(())
}

/// 分配数量须为有限非负数；列表不能为空
pub fn validate_assignments(assignments: &[BalancingAssignment]) -> ApiResult<()> {
    if assignments.is_empty() {
        return Err(ApiError::InvalidInput("没有可提交的分配".to_string()));
    }
    if let Some(bad) = assignments
        .iter()
        .find(|a| !a.assigned_qty_per_hour.is_finite() || a.assigned_qty_per_hour < 0.0)
    {
        return Err(ApiError::InvalidInput(format!(
            "分配数量无效: {} -> {}, qty={}",
            bad.source_operator_id, bad.target_operator_id, bad.assigned_qty_per_hour
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(qty: f64) -> BalancingAssignment {
        BalancingAssignment {
            source_operator_id: "1".into(),
            target_operator_id: "2".into(),
            operation_id: None,
            assigned_qty_per_hour: qty,
        }
    }

    #[test]
    fn test_require_role() {
        let engineer = Session::new("u1", "eng", Role::Engineer);
        assert!(require_role(&engineer, Role::Engineer).is_ok());
        assert!(matches!(
            require_role(&engineer, Role::Supervisor),
            Err(ApiError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_ensure_savable() {
        let header = HeaderInput::new(25, 8, 18.5, 0.7).with_run("L1", "2026-10-19", "Polo");
        assert!(ensure_savable(&header, 454.0).is_ok());
        assert!(ensure_savable(&header, 0.0).is_err());

        let no_line = HeaderInput::new(25, 8, 18.5, 0.7);
        assert!(matches!(
            ensure_savable(&no_line, 454.0),
            Err(ApiError::InsufficientInput(_))
        ));
    }

    #[test]
    fn test_validate_assignments() {
        assert!(validate_assignments(&[assignment(0.0), assignment(5.5)]).is_ok());
        assert!(validate_assignments(&[assignment(-1.0)]).is_err());
        assert!(validate_assignments(&[assignment(f64::NAN)]).is_err());
        assert!(validate_assignments(&[]).is_err());
    }
}
