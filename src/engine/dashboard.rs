// ==========================================
// 成衣产线跟踪系统 - 看板汇总引擎
// ==========================================
// 职责: 把一次运行明细折算为看板卡片数据与逐工序表现
// 输入: RunDetail（所有数值字段经 safe_num）
// 输出: RunSummary
// ==========================================

use crate::domain::alert::OperatorPerformance;
use crate::domain::operation::StitchedEntry;
use crate::domain::run::RunDetail;
use crate::engine::aggregator::normalize_operator_no;
use crate::engine::numeric::{round2, safe_num};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// 看板汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_sewed: f64,
    pub total_target: f64,
    pub operators_count: usize,
    /// 达成率（%），目标 <= 0 时为 0
    pub achievement_pct: f64,
    pub performances: Vec<OperatorPerformance>,
}

/// 时段数量合计
fn entry_sum(entry: &StitchedEntry) -> f64 {
    entry.values().map(|v| safe_num(v, 0.0)).sum()
}

/// 产线实际合计
///
/// 同一编号的工序共享录入数量，只取该编号第一道工序；无编号的操作工各自计入
fn line_sewed(detail: &RunDetail) -> f64 {
    let mut seen: HashSet<String> = HashSet::new();

    detail
        .operations
        .iter()
        .filter(|entry| match normalize_operator_no(entry.operator.operator_no.as_deref()) {
            Some(no) => seen.insert(no),
            None => true,
        })
        .filter_map(|entry| entry.operations.first())
        .map(|rec| entry_sum(&rec.sewed_data))
        .sum()
}

/// 汇总一次运行
#[instrument(skip(detail), fields(run_id = %detail.run.id))]
pub fn summarize_run(detail: &RunDetail) -> RunSummary {
    let style = detail.run.style.clone();

    let performances: Vec<OperatorPerformance> = detail
        .operations
        .iter()
        .flat_map(|entry| {
            let op = &entry.operator;
            let display_name = if op.operator_name.trim().is_empty() {
                op.operator_no.clone().unwrap_or_default()
            } else {
                op.operator_name.clone()
            };
            let style = style.clone();

            entry.operations.iter().map(move |rec| OperatorPerformance {
                operator_no: op.operator_no.clone(),
                operator_name: display_name.clone(),
                operation_name: rec.operation_name.clone(),
                style: style.clone(),
                planned_qty: entry_sum(&rec.stitched_data),
                total_sewed: entry_sum(&rec.sewed_data),
                capacity_per_hour: safe_num(&rec.capacity_per_hour, 0.0),
            })
        })
        .collect();

    let total_sewed = line_sewed(detail);
    let total_target = safe_num(&detail.run.target_pcs, 0.0).max(0.0);
    let achievement_pct = if total_target > 0.0 {
        round2(total_sewed / total_target * 100.0)
    } else {
        0.0
    };

    debug!(
        total_sewed,
        total_target,
        achievement_pct,
        performance_count = performances.len(),
        "看板汇总完成"
    );

    RunSummary {
        total_sewed,
        total_target,
        operators_count: detail.operations.len(),
        achievement_pct,
        performances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::number::NumberLike;
    use crate::domain::run::{OperationRecord, OperatorInfo, OperatorOperations};

    #[test]
    fn test_entry_sum_skips_garbage() {
        let mut entry = StitchedEntry::new();
        entry.insert("H09".into(), NumberLike::from(10.0));
        entry.insert("H10".into(), NumberLike::from("5"));
        entry.insert("H11".into(), NumberLike::from("x"));
        entry.insert("H12".into(), NumberLike::Missing);
        assert_eq!(entry_sum(&entry), 15.0);
    }

    #[test]
    fn test_empty_detail() {
        let summary = summarize_run(&RunDetail::default());
        assert_eq!(summary.total_sewed, 0.0);
        assert_eq!(summary.achievement_pct, 0.0);
        assert!(summary.performances.is_empty());
    }

    #[test]
    fn test_line_sewed_counts_shared_operator_once() {
        let mut sewed = StitchedEntry::new();
        sewed.insert("H09".into(), NumberLike::from(50.0));
        let record = |name: &str| OperationRecord {
            operation_name: name.to_string(),
            sewed_data: sewed.clone(),
            ..Default::default()
        };
        let operator = |no: Option<&str>| OperatorInfo {
            operator_id: no.unwrap_or("x").to_string(),
            operator_no: no.map(str::to_string),
            operator_name: String::new(),
        };

        let detail = RunDetail {
            operations: vec![
                OperatorOperations {
                    operator: operator(Some("7")),
                    operations: vec![record("a"), record("b")],
                },
                OperatorOperations {
                    operator: operator(Some(" 7 ")),
                    operations: vec![record("c")],
                },
                OperatorOperations {
                    operator: operator(None),
                    operations: vec![record("d")],
                },
                OperatorOperations {
                    operator: operator(Some("  ")),
                    operations: vec![record("e")],
                },
            ],
            ..Default::default()
        };

        // 编号 7 计一次，两个无编号操作工各自计入
        assert_eq!(line_sewed(&detail), 150.0);
    }
}
