// ==========================================
// 成衣产线跟踪系统 - 工序行
// ==========================================
// 职责: 一名操作工的一道工序 + 其每小时实际缝制数
// 规则: 同一操作工编号的多行共享同一份 stitched 数据
// ==========================================

use crate::domain::number::{flexible_id, flexible_opt_id, NumberLike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 时段ID → 原始录入数量（缺失/空白视为 0）
pub type StitchedEntry = BTreeMap<String, NumberLike>;

// ==========================================
// OperationRow - 工序行
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRow {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub operator_no: Option<String>, // 操作工编号（空白 = 未分配）
    #[serde(default)]
    pub operator_name: String,
    #[serde(default)]
    pub operation: String, // 工序名称

    // ===== 节拍采样 (秒) =====
    #[serde(default)]
    pub t1: NumberLike,
    #[serde(default)]
    pub t2: NumberLike,
    #[serde(default)]
    pub t3: NumberLike,
    #[serde(default)]
    pub t4: NumberLike,
    #[serde(default)]
    pub t5: NumberLike,

    #[serde(default)]
    pub cap_per_operator: NumberLike, // 每小时产能 (件/小时)

    #[serde(default)]
    pub stitched: StitchedEntry,
}

impl OperationRow {
    pub fn new(id: &str, operator_no: Option<&str>, operation: &str) -> Self {
        Self {
            id: id.to_string(),
            operator_no: operator_no.map(|s| s.to_string()),
            operation: operation.to_string(),
            ..Default::default()
        }
    }

    pub fn with_operator_name(mut self, name: &str) -> Self {
        self.operator_name = name.to_string();
        self
    }

    pub fn with_cycle_times(mut self, samples: [NumberLike; 5]) -> Self {
        let [t1, t2, t3, t4, t5] = samples;
        self.t1 = t1;
        self.t2 = t2;
        self.t3 = t3;
        self.t4 = t4;
        self.t5 = t5;
        self
    }

    pub fn with_stitched(mut self, slot_id: &str, value: impl Into<NumberLike>) -> Self {
        self.stitched.insert(slot_id.to_string(), value.into());
        self
    }

    /// 五个节拍采样
    pub fn cycle_times(&self) -> [&NumberLike; 5] {
        [&self.t1, &self.t2, &self.t3, &self.t4, &self.t5]
    }
}
