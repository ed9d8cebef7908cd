// ==========================================
// 成衣产线跟踪系统 - 班次时段生成引擎
// ==========================================
// 职责: 把工作小时数切分为按整点的时段（排除午休，末段可不足一小时）
// 输入: 工作小时数 + 班次布局
// 输出: 按时间排序的 ShiftSlot 列表
// ==========================================

use crate::domain::number::NumberLike;
use crate::domain::slot::{ShiftLayout, ShiftSlot};
use crate::engine::memo::Memo;
use crate::engine::numeric::{safe_num, NumericInput};
use tracing::{debug, instrument, warn};

/// 小于该值的剩余时长视为 0
const HOURS_EPSILON: f64 = 1e-9;

/// 生成班次时段
///
/// 规则:
/// 1) 工作小时数 <= 0 / 非数字 → 空列表
/// 2) 按布局候选时段依次填充，用完工作小时数即停止
/// 3) 最后一段取剩余的小数部分，标签带结束分钟
/// 4) 请求超过可用跨度时止于 end_hour（总时长可小于请求值）
#[instrument(skip(working_hours), fields(
    start_hour = layout.start_hour,
    end_hour = layout.end_hour,
    lunch_hour = ?layout.lunch_hour
))]
pub fn build_shift_slots<W: NumericInput + ?Sized>(
    working_hours: &W,
    layout: &ShiftLayout,
) -> Vec<ShiftSlot> {
    let wh = safe_num(working_hours, 0.0);
    if wh <= 0.0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut emitted = 0.0_f64;

    for (hour, capacity) in layout.blocks() {
        let remaining = wh - emitted;
        if remaining <= HOURS_EPSILON {
            break;
        }

        let hours = remaining.min(capacity);
        let label = if hours + HOURS_EPSILON >= 1.0 {
            format!("{}-{}", hour, hour + 1)
        } else {
            partial_label(hour, hours)
        };

        slots.push(ShiftSlot {
            id: slot_id(hour),
            label,
            hours,
        });
        emitted += hours;
    }

    if wh - emitted > HOURS_EPSILON {
        warn!(
            requested = wh,
            produced = emitted,
            "工作小时数超过班次可用跨度，止于结束整点"
        );
    }
    debug!(slot_count = slots.len(), total_hours = emitted, "时段生成完成");

    slots
}

/// 时段ID: 起始整点两位补零
fn slot_id(hour: u32) -> String {
    format!("H{:02}", hour)
}

/// 不足一小时时段的标签，如 "17-17:36"
///
/// 分钟按四舍五入取整并限制在 1..=59
fn partial_label(hour: u32, hours: f64) -> String {
    let minutes = (hours * 60.0).round().clamp(1.0, 59.0) as u32;
    format!("{}-{}:{:02}", hour, hour, minutes)
}

/// 所有时段总时长
pub fn total_hours(slots: &[ShiftSlot]) -> f64 {
    slots.iter().map(|s| safe_num(&s.hours, 0.0)).sum()
}

// ==========================================
// ShiftSlotBuilder - 带记忆化的时段生成器
// ==========================================
pub struct ShiftSlotBuilder {
    layout: ShiftLayout,
    memo: Memo<NumberLike, Vec<ShiftSlot>>,
}

impl ShiftSlotBuilder {
    pub fn new(layout: ShiftLayout) -> Self {
        Self {
            layout,
            memo: Memo::new(),
        }
    }

    pub fn layout(&self) -> &ShiftLayout {
        &self.layout
    }

    /// 按工作小时数生成时段（同一输入命中缓存）
    pub fn build(&mut self, working_hours: &NumberLike) -> Vec<ShiftSlot> {
        let layout = self.layout;
        self.memo
            .get_or_compute(working_hours, |wh| build_shift_slots(wh, &layout))
    }
}

impl Default for ShiftSlotBuilder {
    fn default() -> Self {
        Self::new(ShiftLayout::default())
    }
}
