// ==========================================
// 累计分配引擎测试
// ==========================================
// 职责: 验证按时长比例分配、累计封顶、与实际录入对账
// ==========================================

mod helpers;

use garment_line_tracker::domain::{NumberLike, ShiftSlot, StitchedEntry};
use garment_line_tracker::engine::distributor::{
    cumulative, cumulative_capped, distribute_proportional, stitched_per_slot, HourlyPlan,
};
use helpers::test_data_builder::default_slots;

fn slot(id: &str, hours: f64) -> ShiftSlot {
    ShiftSlot {
        id: id.to_string(),
        label: id.to_string(),
        hours,
    }
}

// ==========================================
// 测试1: 比例分配
// ==========================================
#[test]
fn test_equal_slots_split_evenly() {
    let slots = vec![slot("A", 1.0), slot("B", 1.0), slot("C", 1.0), slot("D", 1.0)];
    assert_eq!(distribute_proportional(100.0, &slots), vec![25.0; 4]);
}

#[test]
fn test_partial_slot_gets_proportional_share() {
    // 7.6 小时、目标 380 → 每整点 50，末段 0.6 小时 30
    let slots = default_slots(7.6);
    let per_slot = distribute_proportional(380.0, &slots);

    println!("每时段目标: {:?}", per_slot);
    assert_eq!(per_slot.len(), 8);
    assert!(per_slot[..7].iter().all(|v| *v == 50.0));
    assert_eq!(per_slot[7], 30.0);
}

#[test]
fn test_allocation_sums_to_target() {
    for target in [1.0, 99.99, 454.05, 1234.5] {
        for wh in [1.0, 3.3, 5.75, 7.6] {
            let slots = default_slots(wh);
            let per_slot = distribute_proportional(target, &slots);
            let sum: f64 = per_slot.iter().sum();
            assert!(
                (sum - target).abs() <= 0.005 * slots.len() as f64 + 1e-9,
                "target={} wh={} sum={}",
                target,
                wh,
                sum
            );
        }
    }
}

#[test]
fn test_zero_total_hours_gives_zeros() {
    let slots = vec![slot("A", 0.0), slot("B", 0.0)];
    assert_eq!(distribute_proportional(100.0, &slots), vec![0.0, 0.0]);
    assert!(distribute_proportional(100.0, &[]).is_empty());
}

#[test]
fn test_allocation_is_idempotent() {
    let slots = default_slots(7.6);
    let a = distribute_proportional(454.054, &slots);
    let b = distribute_proportional(454.054, &slots);
    assert_eq!(
        a.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
        b.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
    );
}

// ==========================================
// 测试2: 累计目标
// ==========================================
#[test]
fn test_cumulative_targets_non_decreasing_and_capped() {
    let target = 454.05;
    let slots = default_slots(7.6);
    let per_slot = distribute_proportional(target, &slots);
    let cum = cumulative_capped(&per_slot, target);

    for pair in cum.windows(2) {
        assert!(pair[0] <= pair[1], "累计目标应单调不减");
    }
    assert!(*cum.last().unwrap() <= target, "末段累计不超过总目标");
    assert!((cum.last().unwrap() - target).abs() < 0.05);
}

#[test]
fn test_cumulative_plain() {
    assert_eq!(cumulative(&[10.0, 0.0, 5.5]), vec![10.0, 10.0, 15.5]);
}

// ==========================================
// 测试3: 对账
// ==========================================
#[test]
fn test_hourly_plan_reconciliation() {
    let slots = default_slots(3.0);
    let mut stitched = StitchedEntry::new();
    stitched.insert("H09".into(), NumberLike::from("45"));
    stitched.insert("H10".into(), NumberLike::from(55.0));
    stitched.insert("H11".into(), NumberLike::from(""));
    stitched.insert("H99".into(), NumberLike::from(1000.0)); // 不在时段内，忽略

    let plan = HourlyPlan::build(150.0, &slots, &stitched);

    assert_eq!(plan.slot_targets, vec![50.0, 50.0, 50.0]);
    assert_eq!(plan.cumulative_targets, vec![50.0, 100.0, 150.0]);
    assert_eq!(plan.stitched, vec![45.0, 55.0, 0.0]);
    assert_eq!(plan.cumulative_stitched, vec![45.0, 100.0, 100.0]);
    assert_eq!(plan.total_stitched, 100.0);
    assert_eq!(plan.reconciliation, vec![-5.0, 0.0, -50.0]);
    assert_eq!(plan.latest_reconciliation(), Some(0.0));
}

#[test]
fn test_targets_only_plan() {
    let slots = default_slots(2.0);
    let plan = HourlyPlan::targets_only(100.0, &slots);
    assert_eq!(plan.stitched, vec![0.0, 0.0]);
    assert_eq!(plan.total_stitched, 0.0);
    assert_eq!(plan.latest_reconciliation(), None);
    assert_eq!(plan.reconciliation, vec![-50.0, -100.0]);
}

#[test]
fn test_explicit_zero_counts_as_entered() {
    let slots = default_slots(3.0);
    let mut stitched = StitchedEntry::new();
    stitched.insert("H09".into(), NumberLike::from(40.0));
    stitched.insert("H10".into(), NumberLike::from("0"));
    stitched.insert("H11".into(), NumberLike::from("  "));

    let plan = HourlyPlan::build(150.0, &slots, &stitched);
    println!("录入标记: {:?}, 对账: {:?}", plan.entered, plan.reconciliation);

    assert_eq!(plan.entered, vec![true, true, false]);
    assert_eq!(plan.reconciliation, vec![-10.0, -60.0, -110.0]);
    assert_eq!(plan.latest_reconciliation(), Some(-60.0), "显式录入 0 的时段计为最近录入");
}

#[test]
fn test_stitched_per_slot_ignores_garbage() {
    let slots = default_slots(2.0);
    let mut stitched = StitchedEntry::new();
    stitched.insert("H09".into(), NumberLike::from("abc"));
    stitched.insert("H10".into(), NumberLike::Flag(true));
    assert_eq!(stitched_per_slot(&stitched, &slots), vec![0.0, 1.0]);
}
