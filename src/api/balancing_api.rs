// ==========================================
// 成衣产线跟踪系统 - 线平衡 API
// ==========================================
// 职责: 拉取产能数据 → 缺口分析 → 贪心建议 → 用户编辑 → 提交
// 权限: 仅 Engineer
// 红线: 建议只做预填，提交必须由用户显式调用
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{require_role, validate_assignments};
use crate::domain::balancing::{
    BalancingAssignment, BalancingOutcome, BalancingRunInfo, OperatorGap,
};
use crate::domain::session::Session;
use crate::domain::types::Role;
use crate::engine::balancing::LineBalancer;
use crate::engine::numeric::{safe_num, NumericInput};
use crate::gateway::ProductionGateway;
use crate::i18n::{t, t_with_args};

/// 平衡提案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancingProposal {
    pub run: BalancingRunInfo,
    pub target_per_hour: f64,
    pub gaps: Vec<OperatorGap>,
    pub outcome: BalancingOutcome,
    /// 由建议预填的可编辑分配
    pub assignments: Vec<BalancingAssignment>,
    /// 本地化的结果说明
    pub message: String,
}

// ==========================================
// BalancingApi - 线平衡 API
// ==========================================
pub struct BalancingApi {
    gateway: Arc<dyn ProductionGateway>,
    balancer: LineBalancer,
}

impl BalancingApi {
    pub fn new(gateway: Arc<dyn ProductionGateway>, balanced_tolerance: f64) -> Self {
        Self {
            gateway,
            balancer: LineBalancer::new(balanced_tolerance),
        }
    }

    /// 生成平衡提案
    #[instrument(skip(self, session), fields(user = %session.username))]
    pub async fn propose(&self, session: &Session, run_id: &str) -> ApiResult<BalancingProposal> {
        require_role(session, Role::Engineer)?;

        let context = self.gateway.fetch_balancing(run_id).await?;
        let tph = safe_num(&context.run.target_per_hour, 0.0);

        let gaps = self.balancer.analyze(tph, &context.operators);
        let outcome = self.balancer.suggest(tph, &context.operators);
        let assignments = outcome
            .suggestions()
            .iter()
            .map(BalancingAssignment::from)
            .collect();
        let message = outcome_message(&outcome);

        info!(
            run_id,
            target_per_hour = tph,
            fully_covered = outcome.is_fully_covered(),
            "平衡提案生成完成"
        );

        Ok(BalancingProposal {
            run: context.run,
            target_per_hour: tph,
            gaps,
            outcome,
            assignments,
            message,
        })
    }

    /// 编辑某条分配的数量（非数字视为 0）
    pub fn edit_assignment<V: NumericInput + ?Sized>(
        &self,
        assignments: &mut [BalancingAssignment],
        index: usize,
        raw: &V,
    ) -> ApiResult<f64> {
        let len = assignments.len();
        let assignment = assignments.get_mut(index).ok_or_else(|| {
            ApiError::InvalidInput(format!("分配序号越界: index={}, len={}", index, len))
        })?;
        assignment.assigned_qty_per_hour = safe_num(raw, 0.0);
        Ok(assignment.assigned_qty_per_hour)
    }

    /// 提交分配
    #[instrument(skip(self, session, assignments), fields(user = %session.username, count = assignments.len()))]
    pub async fn save_assignments(
        &self,
        session: &Session,
        run_id: &str,
        assignments: &[BalancingAssignment],
    ) -> ApiResult<usize> {
        require_role(session, Role::Engineer)?;
        validate_assignments(assignments)?;

        let accepted = self.gateway.save_assignments(run_id, assignments).await?;
        info!(run_id, accepted, "平衡分配提交完成");
        Ok(accepted)
    }
}

/// 结果说明（无瓶颈 / 无帮手 / 建议 / 部分覆盖）
pub fn outcome_message(outcome: &BalancingOutcome) -> String {
    match outcome {
        BalancingOutcome::NoBottlenecks => t("balancing.no_bottlenecks"),
        BalancingOutcome::NoHelpers { bottlenecks } => t_with_args(
            "balancing.no_helpers",
            &[("count", bottlenecks.len().to_string().as_str())],
        ),
        BalancingOutcome::Proposed { uncovered, .. } if !uncovered.is_empty() => t_with_args(
            "balancing.partial",
            &[("count", uncovered.len().to_string().as_str())],
        ),
        BalancingOutcome::Proposed { suggestions, .. } => t_with_args(
            "balancing.proposed",
            &[("count", suggestions.len().to_string().as_str())],
        ),
    }
}
