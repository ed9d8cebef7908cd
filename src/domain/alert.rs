// ==========================================
// 成衣产线跟踪系统 - 告警领域模型
// ==========================================
// 告警是派生数据: 每次刷新重新生成，核心层不持久化
// ==========================================

use crate::domain::types::{AlertType, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OperatorPerformance - 操作工/工序表现
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorPerformance {
    pub operator_no: Option<String>,
    pub operator_name: String,
    pub operation_name: String,
    pub style: String,
    pub planned_qty: f64,       // 计划数量
    pub total_sewed: f64,       // 实际缝制数量
    pub capacity_per_hour: f64, // 每小时产能
}

impl OperatorPerformance {
    /// 差异 = 实际 - 计划
    pub fn variance(&self) -> f64 {
        self.total_sewed - self.planned_qty
    }

    /// 效率 = 实际 / 每小时产能，保留两位小数；产能 <= 0 时为 0
    pub fn efficiency(&self) -> f64 {
        if self.capacity_per_hour > 0.0 {
            crate::engine::numeric::round2(self.total_sewed / self.capacity_per_hour)
        } else {
            0.0
        }
    }
}

// ==========================================
// Alert - 告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub operator_no: Option<String>,
    pub operator_name: String,
    pub operation_name: String,
    pub style: String,
    pub line: Option<String>,
    pub date: Option<String>,
    pub planned_qty: f64,
    pub sewed_qty: f64,
    pub variance: f64,
    pub efficiency: f64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
