// ==========================================
// 成衣产线跟踪系统 - 线平衡领域模型
// ==========================================
// 职责: 操作工产能记录、缺口分析行、平衡建议、可编辑分配
// 红线: 建议只是预填提案，提交由用户显式触发
// ==========================================

use crate::domain::number::{flexible_id, flexible_opt_id, NumberLike};
use crate::domain::types::GapStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// 后端返回的产能数据
// ==========================================

/// 工序产能
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationCapacity {
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub operation_name: String,
    #[serde(default)]
    pub capacity_per_hour: NumberLike,
}

/// 操作工产能记录
///
/// 平衡计算以 `operations` 的第一项作为主工序。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperatorCapacityRecord {
    #[serde(default, deserialize_with = "flexible_id")]
    pub operator_id: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub operator_no: Option<String>,
    #[serde(default)]
    pub operator_name: String,
    #[serde(default)]
    pub operations: Vec<OperationCapacity>,
}

impl OperatorCapacityRecord {
    /// 主工序（第一项）
    pub fn main_operation(&self) -> Option<&OperationCapacity> {
        self.operations.first()
    }
}

/// 运行概要（平衡页头部）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalancingRunInfo {
    #[serde(default)]
    pub target_per_hour: NumberLike,
    #[serde(default)]
    pub working_hours: NumberLike,
    #[serde(default)]
    pub operators_count: NumberLike,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub line_no: Option<String>,
}

/// 平衡计算上下文（后端 fetch 的结果）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalancingContext {
    #[serde(default)]
    pub run: BalancingRunInfo,
    #[serde(default)]
    pub operators: Vec<OperatorCapacityRecord>,
}

// ==========================================
// 分析与建议
// ==========================================

/// 单个操作工的缺口分析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorGap {
    pub operator_id: String,
    pub operator_no: Option<String>,
    pub operator_name: String,
    pub operation_id: Option<String>,
    pub operation_name: String,
    pub capacity: f64, // 主工序每小时产能
    pub required: f64, // 产线每小时目标
    pub gap: f64,      // capacity - required
    pub status: GapStatus,
}

/// 平衡建议：从瓶颈工位转移到帮手工位的每小时件数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancingSuggestion {
    pub source_operator_id: String,
    pub source_operator_no: Option<String>,
    pub target_operator_id: String,
    pub target_operator_no: Option<String>,
    pub operation_id: Option<String>,
    pub quantity: f64,
}

/// 贪心分配后仍未覆盖的需求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncoveredNeed {
    pub operator_id: String,
    pub operator_no: Option<String>,
    pub remaining_need: f64,
}

/// 平衡结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalancingOutcome {
    /// 无瓶颈：所有操作工达到或超过目标
    NoBottlenecks,
    /// 有瓶颈但没有富余产能的操作工
    NoHelpers { bottlenecks: Vec<UncoveredNeed> },
    /// 建议列表（可能只部分覆盖）
    Proposed {
        suggestions: Vec<BalancingSuggestion>,
        uncovered: Vec<UncoveredNeed>,
    },
}

impl BalancingOutcome {
    pub fn suggestions(&self) -> &[BalancingSuggestion] {
        match self {
            BalancingOutcome::Proposed { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// 是否所有瓶颈需求都已被覆盖
    pub fn is_fully_covered(&self) -> bool {
        match self {
            BalancingOutcome::NoBottlenecks => true,
            BalancingOutcome::NoHelpers { .. } => false,
            BalancingOutcome::Proposed { uncovered, .. } => uncovered.is_empty(),
        }
    }
}

// ==========================================
// 可编辑分配（由用户持有并提交）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancingAssignment {
    pub source_operator_id: String,
    pub target_operator_id: String,
    pub operation_id: Option<String>,
    pub assigned_qty_per_hour: f64,
}

impl From<&BalancingSuggestion> for BalancingAssignment {
    fn from(s: &BalancingSuggestion) -> Self {
        Self {
            source_operator_id: s.source_operator_id.clone(),
            target_operator_id: s.target_operator_id.clone(),
            operation_id: s.operation_id.clone(),
            assigned_qty_per_hour: s.quantity,
        }
    }
}
