// ==========================================
// 成衣产线跟踪系统 - 引擎层
// ==========================================
// 职责: 目标计算、时段生成、累计分配、汇总、线平衡、告警
// 红线: 纯计算，不做 I/O，不感知会话；任何输入都不报错
// ==========================================

pub mod aggregator;
pub mod alert;
pub mod balancing;
pub mod dashboard;
pub mod distributor;
pub mod memo;
pub mod numeric;
pub mod shift_slots;
pub mod target;

// 重导出核心引擎
pub use aggregator::{
    apply_stitched_edit, capacity_from_cycle_times, filter_rows, group_by_operator, line_total,
    normalize_operator_no, operator_numbers, row_total, OperatorGroup, RowFilter,
};
pub use alert::{AlertContext, AlertGenerator, AlertThresholds};
pub use balancing::{LineBalancer, DEFAULT_BALANCED_TOLERANCE};
pub use dashboard::{summarize_run, RunSummary};
pub use distributor::{cumulative, cumulative_capped, distribute_proportional, HourlyPlan};
pub use memo::Memo;
pub use numeric::{round2, safe_num, NumericInput};
pub use shift_slots::{build_shift_slots, total_hours, ShiftSlotBuilder};
pub use target::{calc_target_from_sam, target_per_hour, TargetCalculator, DEFAULT_EFFICIENCY};
