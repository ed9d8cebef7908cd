// ==========================================
// 成衣产线跟踪系统 - 产线运行数据
// ==========================================
// 职责: 与外部后端交换的运行数据形状（保存/列表/明细）
// 说明: 所有数值字段保持 NumberLike，使用前统一经 safe_num 换算
// ==========================================

use crate::domain::number::{flexible_id, flexible_opt_id, NumberLike};
use crate::domain::operation::StitchedEntry;
use crate::domain::slot::ShiftSlot;
use serde::{Deserialize, Serialize};

// ==========================================
// 保存请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRunRequest {
    pub line: String,
    pub date: String,
    pub style: String,
    pub operators: NumberLike,
    pub working_hours: NumberLike,
    pub sam: NumberLike,
    pub efficiency: f64,
    pub target: f64,
    pub target_per_hour: f64,
    pub slots: Vec<ShiftSlot>,
}

// ==========================================
// 运行列表项
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunListing {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub line_no: Option<String>,
    #[serde(default)]
    pub run_date: String,
    #[serde(default)]
    pub style: String,
}

// ==========================================
// 运行明细
// ==========================================

/// 运行头信息
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub line_no: Option<String>,
    #[serde(default)]
    pub run_date: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub target_pcs: NumberLike,
    #[serde(default)]
    pub target_per_hour: NumberLike,
    #[serde(default)]
    pub working_hours: NumberLike,
    #[serde(default)]
    pub sam_minutes: NumberLike,
    #[serde(default)]
    pub efficiency: NumberLike,
    #[serde(default)]
    pub slots: Vec<ShiftSlot>,
}

/// 操作工信息
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperatorInfo {
    #[serde(default, deserialize_with = "flexible_id")]
    pub operator_id: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub operator_no: Option<String>,
    #[serde(default)]
    pub operator_name: String,
}

/// 工序记录（含每时段数量）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationRecord {
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub operation_name: String,
    #[serde(default)]
    pub capacity_per_hour: NumberLike,
    #[serde(default)]
    pub stitched_data: StitchedEntry, // 计划侧数量（按时段）
    #[serde(default)]
    pub sewed_data: StitchedEntry, // 实际缝制数量（按时段）
}

/// 单个操作工的全部工序
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperatorOperations {
    pub operator: OperatorInfo,
    #[serde(default)]
    pub operations: Vec<OperationRecord>,
}

/// 运行明细
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunDetail {
    #[serde(default)]
    pub run: RunRecord,
    #[serde(default)]
    pub operations: Vec<OperatorOperations>,
}
