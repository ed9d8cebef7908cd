// ==========================================
// 成衣产线跟踪系统 - 累计分配引擎
// ==========================================
// 职责: 按时段时长比例分配目标，计算累计目标（封顶于总目标），
//       并与实际缝制数逐段对账
// 规则: 分配时即保留两位小数，保证重复求和可复现
// ==========================================

use crate::domain::operation::StitchedEntry;
use crate::domain::slot::ShiftSlot;
use crate::engine::numeric::{round2, safe_num};
use crate::engine::shift_slots::total_hours;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 按时段时长比例分配目标
///
/// `slot_target[i] = round2(target × hours[i] / Σhours)`；Σhours = 0 时全部为 0
pub fn distribute_proportional(target: f64, slots: &[ShiftSlot]) -> Vec<f64> {
    let target = safe_num(&target, 0.0);
    let total = total_hours(slots);

    if total <= 0.0 {
        return vec![0.0; slots.len()];
    }

    slots
        .iter()
        .map(|s| round2(target * safe_num(&s.hours, 0.0) / total))
        .collect()
}

/// 累计求和（不封顶）
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    values
        .iter()
        .map(|v| {
            running += safe_num(v, 0.0);
            running
        })
        .collect()
}

/// 累计求和并封顶
///
/// 每个元素 `min(running, cap)` 后保留两位小数，修正末段的浮点超出
pub fn cumulative_capped(values: &[f64], cap: f64) -> Vec<f64> {
    cumulative(values)
        .into_iter()
        .map(|v| round2(v.min(cap)))
        .collect()
}

/// 按时段顺序取出录入值（缺失/空白/非数字为 0）
pub fn stitched_per_slot(stitched: &StitchedEntry, slots: &[ShiftSlot]) -> Vec<f64> {
    slots
        .iter()
        .map(|s| stitched.get(&s.id).map(|v| safe_num(v, 0.0)).unwrap_or(0.0))
        .collect()
}

// ==========================================
// HourlyPlan - 每小时计划与对账
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPlan {
    pub target: f64,
    pub slots: Vec<ShiftSlot>,
    pub slot_targets: Vec<f64>,
    pub cumulative_targets: Vec<f64>,
    pub stitched: Vec<f64>,
    pub cumulative_stitched: Vec<f64>,
    /// 时段是否有录入（显式录入 0 也算）
    pub entered: Vec<bool>,
    pub total_stitched: f64,
    /// 累计实际 - 累计目标（正数 = 超前）
    pub reconciliation: Vec<f64>,
}

impl HourlyPlan {
    /// 仅目标侧（无录入）
    pub fn targets_only(target: f64, slots: &[ShiftSlot]) -> Self {
        Self::build(target, slots, &StitchedEntry::new())
    }

    /// 构建每小时计划并与录入对账
    #[instrument(skip(slots, stitched), fields(slot_count = slots.len()))]
    pub fn build(target: f64, slots: &[ShiftSlot], stitched: &StitchedEntry) -> Self {
        let target = safe_num(&target, 0.0);
        let slot_targets = distribute_proportional(target, slots);
        let cumulative_targets = cumulative_capped(&slot_targets, target);

        let stitched_values = stitched_per_slot(stitched, slots);
        let entered = slots
            .iter()
            .map(|s| stitched.get(&s.id).is_some_and(|v| !v.is_blank()))
            .collect();
        let cumulative_stitched = cumulative(&stitched_values);
        let total_stitched = cumulative_stitched.last().copied().unwrap_or(0.0);

        let reconciliation = cumulative_stitched
            .iter()
            .zip(cumulative_targets.iter())
            .map(|(actual, planned)| round2(actual - planned))
            .collect();

        Self {
            target,
            slots: slots.to_vec(),
            slot_targets,
            cumulative_targets,
            stitched: stitched_values,
            cumulative_stitched,
            entered,
            total_stitched,
            reconciliation,
        }
    }

    /// 最近一个已录入时段的对账差额
    pub fn latest_reconciliation(&self) -> Option<f64> {
        self.entered
            .iter()
            .rposition(|entered| *entered)
            .and_then(|idx| self.reconciliation.get(idx).copied())
    }
}
