// ==========================================
// 成衣产线跟踪系统 - 目标计算引擎
// ==========================================
// 公式: target = operators × workingHours × (60 / sam) × efficiency
// 红线: 任一输入缺失/非数字/非正 → 目标为 0（不报错）
// ==========================================

use crate::domain::header::HeaderInput;
use crate::domain::number::NumberLike;
use crate::engine::memo::Memo;
use crate::engine::numeric::{safe_num, NumericInput};
use tracing::debug;

/// 默认效率（表单未选择时）
pub const DEFAULT_EFFICIENCY: f64 = 0.7;

/// 由 SAM 计算产量目标（件）
///
/// # 参数
/// - `operators`: 操作工人数
/// - `working_hours`: 工作小时数
/// - `sam`: 标准工时（分钟/件）
/// - `efficiency`: 效率；缺失或非有限时取 0.7
///
/// # 返回
/// 非负目标；sam/人数/工时/效率任一非正时为 0
pub fn calc_target_from_sam<A, B, C, D>(
    operators: &A,
    working_hours: &B,
    sam: &C,
    efficiency: &D,
) -> f64
where
    A: NumericInput + ?Sized,
    B: NumericInput + ?Sized,
    C: NumericInput + ?Sized,
    D: NumericInput + ?Sized,
{
    calc_target_with_default(operators, working_hours, sam, efficiency, DEFAULT_EFFICIENCY)
}

/// 同 [`calc_target_from_sam`]，可指定默认效率
pub fn calc_target_with_default<A, B, C, D>(
    operators: &A,
    working_hours: &B,
    sam: &C,
    efficiency: &D,
    default_efficiency: f64,
) -> f64
where
    A: NumericInput + ?Sized,
    B: NumericInput + ?Sized,
    C: NumericInput + ?Sized,
    D: NumericInput + ?Sized,
{
    let ops = safe_num(operators, 0.0);
    let wh = safe_num(working_hours, 0.0);
    let sam = safe_num(sam, 0.0);
    let eff = safe_num(efficiency, default_efficiency);

    if ops <= 0.0 || wh <= 0.0 || sam <= 0.0 || eff <= 0.0 {
        return 0.0;
    }

    let target = ops * wh * (60.0 / sam) * eff;
    if target.is_finite() && target > 0.0 {
        target
    } else {
        0.0
    }
}

/// 每小时目标；工时 <= 0 时为 0
pub fn target_per_hour<W: NumericInput + ?Sized>(target: f64, working_hours: &W) -> f64 {
    let wh = safe_num(working_hours, 0.0);
    if wh > 0.0 {
        target / wh
    } else {
        0.0
    }
}

// ==========================================
// TargetCalculator - 带记忆化的目标计算器
// ==========================================
// 键: 表头四个原始输入；任一变化即重算
type TargetKey = (NumberLike, NumberLike, NumberLike, NumberLike);

pub struct TargetCalculator {
    default_efficiency: f64,
    memo: Memo<TargetKey, f64>,
}

impl TargetCalculator {
    pub fn new(default_efficiency: f64) -> Self {
        Self {
            default_efficiency,
            memo: Memo::new(),
        }
    }

    /// 计算表头对应的目标
    pub fn target_for(&mut self, header: &HeaderInput) -> f64 {
        let key = (
            header.operators.clone(),
            header.working_hours.clone(),
            header.sam.clone(),
            header.efficiency.clone(),
        );
        let default_efficiency = self.default_efficiency;

        self.memo.get_or_compute(&key, |(ops, wh, sam, eff)| {
            let target = calc_target_with_default(ops, wh, sam, eff, default_efficiency);
            debug!(target, "目标重算");
            target
        })
    }

    /// 表头对应的每小时目标
    pub fn target_per_hour_for(&mut self, header: &HeaderInput) -> f64 {
        let target = self.target_for(header);
        target_per_hour(target, &header.working_hours)
    }

    pub fn default_efficiency(&self) -> f64 {
        self.default_efficiency
    }

    /// 缓存命中次数（诊断用）
    pub fn cache_hits(&self) -> u64 {
        self.memo.hits()
    }
}

impl Default for TargetCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_EFFICIENCY)
    }
}
