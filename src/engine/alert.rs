// ==========================================
// 成衣产线跟踪系统 - 告警生成引擎
// ==========================================
// 职责: 按差异与效率区间对操作工/工序表现做规则判定
// 输入: OperatorPerformance 列表 + 产线/日期上下文
// 输出: 按严重程度排序的告警（HIGH → MEDIUM → LOW）
// 说明: 同一工序可同时触发多条告警（如欠产 + 低效）
// ==========================================

use crate::domain::alert::{Alert, OperatorPerformance};
use crate::domain::types::{AlertType, Severity};
use crate::i18n::t_with_args;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

// ==========================================
// AlertThresholds - 告警阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub critical_variance_ratio: f64, // 欠产 > 计划 × 该比例 → 严重
    pub variance_ratio: f64,          // 欠产 > 计划 × 该比例 → 欠产告警
    pub high_variance_ratio: f64,     // 欠产告警中 > 计划 × 该比例 → HIGH
    pub efficiency_low: f64,          // 0 < 效率 < 该值 → HIGH
    pub efficiency_warning: f64,      // efficiency_low <= 效率 < 该值 → MEDIUM
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical_variance_ratio: 0.5,
            variance_ratio: 0.1,
            high_variance_ratio: 0.3,
            efficiency_low: 0.6,
            efficiency_warning: 0.8,
        }
    }
}

/// 告警上下文（产线/日期）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertContext {
    pub line: Option<String>,
    pub date: Option<String>,
}

// ==========================================
// AlertGenerator - 告警生成器
// ==========================================
pub struct AlertGenerator {
    thresholds: AlertThresholds,
}

impl AlertGenerator {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// 生成告警并按严重程度稳定排序
    #[instrument(skip(self, records, ctx), fields(record_count = records.len()))]
    pub fn generate(&self, records: &[OperatorPerformance], ctx: &AlertContext) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = records
            .iter()
            .flat_map(|rec| {
                self.evaluate(rec)
                    .into_iter()
                    .map(move |(alert_type, severity, message)| {
                        build_alert(rec, ctx, alert_type, severity, message)
                    })
            })
            .collect();

        alerts.sort_by_key(|a| a.severity.rank());

        debug!(alert_count = alerts.len(), "告警生成完成");
        alerts
    }

    /// 单条记录的规则判定
    ///
    /// # 返回
    /// (告警类型, 严重程度, 本地化消息) 列表
    pub fn evaluate(&self, rec: &OperatorPerformance) -> Vec<(AlertType, Severity, String)> {
        let th = &self.thresholds;
        let planned = rec.planned_qty;
        let variance = rec.variance();
        let shortfall = variance.abs();
        let efficiency = rec.efficiency();

        let no = rec.operator_no.clone().unwrap_or_default();
        let mut out = Vec::new();

        // 1. 欠产（严重 / 一般）
        if variance < 0.0 && shortfall > planned * th.critical_variance_ratio {
            let pct = if planned > 0.0 {
                shortfall / planned * 100.0
            } else {
                0.0
            };
            let pct_text = format!("{:.1}", pct);
            out.push((
                AlertType::CriticalVariance,
                Severity::High,
                t_with_args(
                    "alert.critical_variance",
                    &[
                        ("no", no.as_str()),
                        ("name", rec.operator_name.as_str()),
                        ("pct", pct_text.as_str()),
                        ("operation", rec.operation_name.as_str()),
                    ],
                ),
            ));
        } else if variance < 0.0 && shortfall > planned * th.variance_ratio {
            let severity = if shortfall > planned * th.high_variance_ratio {
                Severity::High
            } else {
                Severity::Medium
            };
            let qty_text = format!("{}", shortfall);
            out.push((
                AlertType::Variance,
                severity,
                t_with_args(
                    "alert.variance",
                    &[
                        ("no", no.as_str()),
                        ("name", rec.operator_name.as_str()),
                        ("qty", qty_text.as_str()),
                        ("operation", rec.operation_name.as_str()),
                    ],
                ),
            ));
        }

        // 2. 效率区间
        let pct = format!("{:.1}", efficiency * 100.0);
        if efficiency > 0.0 && efficiency < th.efficiency_low {
            out.push((
                AlertType::Efficiency,
                Severity::High,
                t_with_args(
                    "alert.efficiency_low",
                    &[
                        ("no", no.as_str()),
                        ("name", rec.operator_name.as_str()),
                        ("pct", pct.as_str()),
                        ("operation", rec.operation_name.as_str()),
                    ],
                ),
            ));
        } else if efficiency >= th.efficiency_low && efficiency < th.efficiency_warning {
            out.push((
                AlertType::Efficiency,
                Severity::Medium,
                t_with_args(
                    "alert.efficiency_warning",
                    &[
                        ("no", no.as_str()),
                        ("name", rec.operator_name.as_str()),
                        ("pct", pct.as_str()),
                        ("operation", rec.operation_name.as_str()),
                    ],
                ),
            ));
        }

        // 3. 零产出
        if rec.total_sewed == 0.0 && planned > 0.0 {
            out.push((
                AlertType::NoProduction,
                Severity::High,
                t_with_args(
                    "alert.no_production",
                    &[
                        ("no", no.as_str()),
                        ("name", rec.operator_name.as_str()),
                        ("operation", rec.operation_name.as_str()),
                    ],
                ),
            ));
        }

        out
    }
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new(AlertThresholds::default())
    }
}

fn build_alert(
    rec: &OperatorPerformance,
    ctx: &AlertContext,
    alert_type: AlertType,
    severity: Severity,
    message: String,
) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        alert_type,
        severity,
        operator_no: rec.operator_no.clone(),
        operator_name: rec.operator_name.clone(),
        operation_name: rec.operation_name.clone(),
        style: rec.style.clone(),
        line: ctx.line.clone(),
        date: ctx.date.clone(),
        planned_qty: rec.planned_qty,
        sewed_qty: rec.total_sewed,
        variance: rec.variance(),
        efficiency: rec.efficiency(),
        message,
        timestamp: Utc::now(),
    }
}
