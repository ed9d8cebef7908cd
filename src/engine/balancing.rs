// ==========================================
// 成衣产线跟踪系统 - 线平衡建议引擎
// ==========================================
// 职责: 按主工序产能与每小时目标的缺口，划分瓶颈/帮手并贪心匹配
// 算法: 首次适配贪心（first-fit greedy），无回溯，不保证最优，
//       不保证转移次数最少，富余不足时只部分覆盖
// 红线: 只产出建议，不自动提交
// ==========================================

use crate::domain::balancing::{
    BalancingOutcome, BalancingSuggestion, OperatorCapacityRecord, OperatorGap, UncoveredNeed,
};
use crate::domain::types::GapStatus;
use crate::engine::numeric::safe_num;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// 展示用的"已平衡"容差（件/小时）
pub const DEFAULT_BALANCED_TOLERANCE: f64 = 0.01;

/// 剩余需求低于该值视为已覆盖
const NEED_EPSILON: f64 = 1e-9;

// ==========================================
// LineBalancer - 线平衡引擎
// ==========================================
pub struct LineBalancer {
    balanced_tolerance: f64,
}

impl LineBalancer {
    pub fn new(balanced_tolerance: f64) -> Self {
        Self {
            balanced_tolerance: safe_num(&balanced_tolerance, DEFAULT_BALANCED_TOLERANCE).abs(),
        }
    }

    // ==========================================
    // 缺口分析
    // ==========================================

    /// 逐个操作工计算主工序缺口（保持输入顺序）
    pub fn analyze(
        &self,
        target_per_hour: f64,
        operators: &[OperatorCapacityRecord],
    ) -> Vec<OperatorGap> {
        let required = safe_num(&target_per_hour, 0.0);

        operators
            .iter()
            .map(|op| {
                let main = op.main_operation();
                let capacity = main
                    .map(|m| safe_num(&m.capacity_per_hour, 0.0))
                    .unwrap_or(0.0);
                let gap = capacity - required;

                OperatorGap {
                    operator_id: op.operator_id.clone(),
                    operator_no: op.operator_no.clone(),
                    operator_name: op.operator_name.clone(),
                    operation_id: main.and_then(|m| m.operation_id.clone()),
                    operation_name: main.map(|m| m.operation_name.clone()).unwrap_or_default(),
                    capacity,
                    required,
                    gap,
                    status: self.classify(gap),
                }
            })
            .collect()
    }

    /// 展示状态（容差内视为平衡）
    pub fn classify(&self, gap: f64) -> GapStatus {
        if gap < -self.balanced_tolerance {
            GapStatus::Bottleneck
        } else if gap > self.balanced_tolerance {
            GapStatus::Surplus
        } else {
            GapStatus::Balanced
        }
    }

    // ==========================================
    // 贪心匹配
    // ==========================================

    /// 生成平衡建议
    ///
    /// 规则:
    /// 1) gap < 0 为瓶颈，按 gap 升序（缺口最大者优先）
    /// 2) gap > 0 为帮手，按 gap 降序（富余最大者优先）
    /// 3) 每个瓶颈依次扫描帮手，take = min(剩余需求, 帮手剩余富余)
    /// 4) 帮手富余原地扣减，可拆分给多个瓶颈（先到先得）
    #[instrument(skip(self, operators), fields(operator_count = operators.len()))]
    pub fn suggest(
        &self,
        target_per_hour: f64,
        operators: &[OperatorCapacityRecord],
    ) -> BalancingOutcome {
        let gaps = self.analyze(target_per_hour, operators);

        let mut bottlenecks: Vec<&OperatorGap> = gaps.iter().filter(|g| g.gap < 0.0).collect();
        bottlenecks.sort_by(|a, b| a.gap.partial_cmp(&b.gap).unwrap_or(Ordering::Equal));

        let mut helpers: Vec<(&OperatorGap, f64)> = gaps
            .iter()
            .filter(|g| g.gap > 0.0)
            .map(|g| (g, g.gap))
            .collect();
        helpers.sort_by(|a, b| b.0.gap.partial_cmp(&a.0.gap).unwrap_or(Ordering::Equal));

        debug!(
            bottlenecks = bottlenecks.len(),
            helpers = helpers.len(),
            target_per_hour,
            "缺口分类完成"
        );

        if bottlenecks.is_empty() {
            return BalancingOutcome::NoBottlenecks;
        }

        if helpers.is_empty() {
            let needs = bottlenecks
                .iter()
                .map(|b| UncoveredNeed {
                    operator_id: b.operator_id.clone(),
                    operator_no: b.operator_no.clone(),
                    remaining_need: -b.gap,
                })
                .collect();
            return BalancingOutcome::NoHelpers { bottlenecks: needs };
        }

        let mut suggestions = Vec::new();
        let mut uncovered = Vec::new();

        for bottleneck in &bottlenecks {
            let mut need = -bottleneck.gap;

            for (helper, spare) in helpers.iter_mut() {
                if need <= 0.0 {
                    break;
                }
                let take = need.min(*spare);
                if take > 0.0 {
                    suggestions.push(BalancingSuggestion {
                        source_operator_id: bottleneck.operator_id.clone(),
                        source_operator_no: bottleneck.operator_no.clone(),
                        target_operator_id: helper.operator_id.clone(),
                        target_operator_no: helper.operator_no.clone(),
                        operation_id: bottleneck.operation_id.clone(),
                        quantity: take,
                    });
                    need -= take;
                    *spare -= take;
                }
            }

            if need > NEED_EPSILON {
                uncovered.push(UncoveredNeed {
                    operator_id: bottleneck.operator_id.clone(),
                    operator_no: bottleneck.operator_no.clone(),
                    remaining_need: need,
                });
            }
        }

        info!(
            suggestions = suggestions.len(),
            uncovered = uncovered.len(),
            "平衡建议生成完成"
        );

        BalancingOutcome::Proposed {
            suggestions,
            uncovered,
        }
    }
}

impl Default for LineBalancer {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCED_TOLERANCE)
    }
}
