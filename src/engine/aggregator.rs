// ==========================================
// 成衣产线跟踪系统 - 缝制数量汇总引擎
// ==========================================
// 职责: 工序行的录入同步、操作工/产线汇总、分组与筛选
// 红线1: 同一操作工编号的所有行共享同一份录入（单次更新覆盖全部行）
// 红线2: 产线合计中，多工序操作工只计一次（取首行）
// 红线3: 分组/筛选为只读投影，不修改原始数据
// ==========================================

use crate::domain::number::NumberLike;
use crate::domain::operation::OperationRow;
use crate::domain::slot::ShiftSlot;
use crate::engine::numeric::safe_num;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// 节拍换算常数（秒/小时）
const SECONDS_PER_HOUR: f64 = 3600.0;

/// 规范化操作工编号：去空白；空白视为未分配
pub fn normalize_operator_no(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 由节拍采样计算每小时产能: 3600 / 有效采样均值
///
/// 有效采样 = 有限且 > 0；无有效采样时为 0
pub fn capacity_from_cycle_times(samples: &[&NumberLike]) -> f64 {
    let valid: Vec<f64> = samples
        .iter()
        .map(|s| safe_num(*s, 0.0))
        .filter(|v| *v > 0.0)
        .collect();

    if valid.is_empty() {
        return 0.0;
    }

    let avg = valid.iter().sum::<f64>() / valid.len() as f64;
    SECONDS_PER_HOUR / avg
}

impl OperationRow {
    /// 规范化后的操作工编号
    pub fn normalized_operator_no(&self) -> Option<String> {
        normalize_operator_no(self.operator_no.as_deref())
    }

    /// 有效产能：优先使用已存产能（> 0），否则由节拍推算
    pub fn effective_capacity(&self) -> f64 {
        let stored = safe_num(&self.cap_per_operator, 0.0);
        if stored > 0.0 {
            stored
        } else {
            capacity_from_cycle_times(&self.cycle_times())
        }
    }
}

// ==========================================
// 行级合计
// ==========================================

/// 单行在已知时段上的缝制合计
pub fn row_total(row: &OperationRow, slots: &[ShiftSlot]) -> f64 {
    slots.iter().map(|s| slot_value(row, &s.id)).sum()
}

/// 单行单时段的缝制数
pub fn slot_value(row: &OperationRow, slot_id: &str) -> f64 {
    row.stitched
        .get(slot_id)
        .map(|v| safe_num(v, 0.0))
        .unwrap_or(0.0)
}

// ==========================================
// 录入同步
// ==========================================

/// 应用一次录入编辑
///
/// - 行有操作工编号：同编号的所有行同步写入
/// - 行无编号：仅写该行
///
/// # 返回
/// 被更新的行数；行ID不存在时为 0
pub fn apply_stitched_edit(
    rows: &mut [OperationRow],
    row_id: &str,
    slot_id: &str,
    value: NumberLike,
) -> usize {
    let operator_no = match rows.iter().find(|r| r.id == row_id) {
        Some(row) => row.normalized_operator_no(),
        None => return 0,
    };

    let mut updated = 0;
    for row in rows.iter_mut() {
        let hit = match &operator_no {
            Some(no) => row.normalized_operator_no().as_deref() == Some(no.as_str()),
            None => row.id == row_id,
        };
        if hit {
            row.stitched.insert(slot_id.to_string(), value.clone());
            updated += 1;
        }
    }

    debug!(row_id, slot_id, updated, "录入同步完成");
    updated
}

// ==========================================
// 产线合计（去重）
// ==========================================

/// 产线缝制合计
///
/// 已分配编号按首行计一次；未分配行各自计入
pub fn line_total(rows: &[OperationRow], slots: &[ShiftSlot]) -> f64 {
    let mut seen: HashSet<String> = HashSet::new();
    let mut total = 0.0;

    for row in rows {
        match row.normalized_operator_no() {
            Some(no) => {
                if seen.insert(no) {
                    total += row_total(row, slots);
                }
            }
            None => total += row_total(row, slots),
        }
    }

    total
}

// ==========================================
// 分组
// ==========================================

/// 操作工分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorGroup {
    /// None = 未分配组
    pub operator_no: Option<String>,
    pub operator_name: String,
    pub rows: Vec<OperationRow>,
    /// 代表行（首行）合计
    pub operator_total: f64,
    /// 代表行逐时段数量
    pub per_slot_totals: Vec<f64>,
}

/// 编号的数值形式；"NaN"/"inf" 之类按文本处理
fn numeric_operator_no(no: &str) -> Option<f64> {
    no.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 编号比较：都是有限数字时按数值，否则按文本（数字在前）
fn compare_operator_no(a: &str, b: &str) -> Ordering {
    match (numeric_operator_no(a), numeric_operator_no(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// 去重排序后的操作工编号
pub fn operator_numbers(rows: &[OperationRow]) -> Vec<String> {
    let mut numbers: Vec<String> = rows
        .iter()
        .filter_map(OperationRow::normalized_operator_no)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    numbers.sort_by(|a, b| compare_operator_no(a, b));
    numbers
}

/// 按操作工编号分组（编号升序，未分配组在最后）
pub fn group_by_operator(rows: &[OperationRow], slots: &[ShiftSlot]) -> Vec<OperatorGroup> {
    let mut groups: Vec<OperatorGroup> = Vec::new();

    for row in rows {
        let key = row.normalized_operator_no();
        match groups.iter_mut().find(|g| g.operator_no == key) {
            Some(group) => group.rows.push(row.clone()),
            None => groups.push(OperatorGroup {
                operator_no: key,
                operator_name: row.operator_name.clone(),
                rows: vec![row.clone()],
                operator_total: 0.0,
                per_slot_totals: Vec::new(),
            }),
        }
    }

    for group in groups.iter_mut() {
        if let Some(first) = group.rows.first() {
            group.operator_total = row_total(first, slots);
            group.per_slot_totals = slots.iter().map(|s| slot_value(first, &s.id)).collect();
        }
    }

    groups.sort_by(|a, b| match (&a.operator_no, &b.operator_no) {
        (Some(x), Some(y)) => compare_operator_no(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    groups
}

// ==========================================
// 筛选
// ==========================================

/// 行筛选条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFilter {
    /// None = 全部操作工
    #[serde(default)]
    pub operator_no: Option<String>,
    /// 对工序名/操作工姓名/编号做不区分大小写的包含匹配
    #[serde(default)]
    pub search: String,
}

impl RowFilter {
    pub fn matches(&self, row: &OperationRow) -> bool {
        let op_no = row.normalized_operator_no().unwrap_or_default();

        let operator_ok = match normalize_operator_no(self.operator_no.as_deref()) {
            Some(wanted) => op_no == wanted,
            None => true,
        };
        if !operator_ok {
            return false;
        }

        let q = self.search.trim().to_lowercase();
        q.is_empty()
            || row.operation.to_lowercase().contains(&q)
            || row.operator_name.to_lowercase().contains(&q)
            || op_no.to_lowercase().contains(&q)
    }
}

/// 按条件筛选行（只读）
pub fn filter_rows<'a>(rows: &'a [OperationRow], filter: &RowFilter) -> Vec<&'a OperationRow> {
    rows.iter().filter(|r| filter.matches(r)).collect()
}
