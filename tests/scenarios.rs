//! End-to-end allocation scenarios.

use u_assign::allocation::{allocate, allocate_with, AllocConfig, Strategy};
use u_assign::eligibility::{EligibilityFilter, Ineligibility};
use u_assign::models::{Candidate, SlotType};
use u_assign::report::{preference_demand, RunSummary};
use u_assign::AllocError;

fn drive_companies() -> Vec<SlotType> {
    vec![
        SlotType::new("c1", "Google", 3)
            .with_min_merit(9.0)
            .with_allowed_categories(["CSE", "ECE"])
            .with_required_qualifications(["Data Structures", "Python"]),
        SlotType::new("c2", "Microsoft", 4)
            .with_min_merit(8.5)
            .with_allowed_categories(["CSE", "ECE", "EEE"])
            .with_required_qualifications(["C++", "SQL"]),
        SlotType::new("c4", "TCS", 10)
            .with_min_merit(6.5)
            .with_allowed_categories(["CSE", "ECE", "MECH", "CIVIL", "EEE"])
            .with_required_qualifications(["SQL"]),
        SlotType::new("c5", "Tesla", 2)
            .with_min_merit(8.5)
            .with_allowed_categories(["MECH", "EEE", "ECE"])
            .with_required_qualifications(["Python", "C++"]),
        SlotType::new("c6", "L&T", 6)
            .with_min_merit(7.0)
            .with_allowed_categories(["CIVIL", "MECH"]),
    ]
}

fn drive_students() -> Vec<Candidate> {
    vec![
        Candidate::new("s1", "Aarav A.", "CSE", 9.4)
            .with_qualifications(["Python", "Data Structures", "SQL", "C++"])
            .with_preferences(["c1", "c2", "c4"]),
        Candidate::new("s2", "Vivaan B.", "ECE", 9.1)
            .with_qualifications(["python", "data structures"])
            .with_preferences(["c1", "c5"]),
        Candidate::new("s3", "Aditya C.", "MECH", 8.7)
            .with_qualifications(["Python", "C++"])
            .with_preferences(["c5", "c6"]),
        Candidate::new("s4", "Vihaan D.", "EEE", 8.7)
            .with_qualifications(["Python", "C++", "SQL"])
            .with_preferences(["c5", "c2"]),
        Candidate::new("s5", "Arjun E.", "EEE", 8.9)
            .with_qualifications(["C++", "Python"])
            .with_preferences(["c5"]),
        Candidate::new("s6", "Sai F.", "CIVIL", 6.8)
            .with_qualifications(["SQL"])
            .with_preferences(["c6", "c4"]),
        Candidate::new("s7", "Reyansh G.", "CSE", 6.2)
            .with_qualifications(["SQL"])
            .with_preferences(["c4"]),
        Candidate::new("s8", "Ayaan H.", "ECE", 9.6)
            .with_qualifications(["Java", "AWS"])
            .with_preferences(["c3", "c1"]),
    ]
}

// ---- Concrete scenarios ----

#[test]
fn test_merit_threshold_not_capacity() {
    let slots = vec![SlotType::new("x", "Only", 1)
        .with_min_merit(8.0)
        .with_allowed_categories(["X"])];
    let cohort = vec![
        Candidate::new("a", "Ada", "X", 9.0).with_preferences(["x"]),
        Candidate::new("b", "Bo", "X", 7.5).with_preferences(["x"]),
    ];

    for strategy in [Strategy::Greedy, Strategy::Stable] {
        let result = allocate(&cohort, &slots, strategy);
        assert_eq!(result.placed_ids(), vec!["a"], "{strategy}");
        assert_eq!(result.leftover.len(), 1);
        assert_eq!(result.leftover[0].id, "b");

        // Fails on merit, and would fail even with room to spare.
        let verdict = EligibilityFilter::check(&cohort[1], &slots[0], 1);
        assert_eq!(
            verdict.reasons(),
            &[Ineligibility::BelowMinimumMerit {
                required: 8.0,
                actual: 7.5
            }]
        );
    }
}

#[test]
fn test_stable_eviction_and_fallback() {
    let slots = vec![
        SlotType::new("x", "Contested", 1)
            .with_min_merit(5.0)
            .with_allowed_categories(["X"]),
        SlotType::new("y", "Fallback", 1)
            .with_min_merit(5.0)
            .with_allowed_categories(["X"]),
    ];

    let without_fallback = vec![
        Candidate::new("a", "A", "X", 6.0).with_preferences(["x"]),
        Candidate::new("b", "B", "X", 8.0).with_preferences(["x"]),
    ];
    let result = allocate(&without_fallback, &slots, Strategy::Stable);
    assert_eq!(result.placed_ids(), vec!["b"]);
    assert_eq!(result.leftover[0].id, "a");
    assert_eq!(result.displacements.len(), 1);

    let with_fallback = vec![
        Candidate::new("a", "A", "X", 6.0).with_preferences(["x", "y"]),
        Candidate::new("b", "B", "X", 8.0).with_preferences(["x"]),
    ];
    let result = allocate(&with_fallback, &slots, Strategy::Stable);
    assert_eq!(result.commitment_for("b").unwrap().slot_type_id, "x");
    assert_eq!(result.commitment_for("a").unwrap().slot_type_id, "y");
    assert!(result.leftover.is_empty());
}

// ---- Placement drive ----

fn pairs(result: &u_assign::RunResult) -> Vec<(&str, &str)> {
    result
        .commitments
        .iter()
        .map(|c| (c.candidate_id.as_str(), c.slot_type_id.as_str()))
        .collect()
}

fn leftover_ids(result: &u_assign::RunResult) -> Vec<&str> {
    result.leftover.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_placement_drive_greedy() {
    let result = allocate(&drive_students(), &drive_companies(), Strategy::Greedy);

    // Equal merit 8.7: Aditya C. picks before Vihaan D. and takes Tesla.
    assert_eq!(
        pairs(&result),
        vec![
            ("s1", "c1"),
            ("s2", "c1"),
            ("s5", "c5"),
            ("s3", "c5"),
            ("s4", "c2"),
            ("s6", "c4"),
        ]
    );
    // Merit-priority order: s8 (9.6, lacks Google's skills) before s7 (6.2).
    assert_eq!(leftover_ids(&result), vec!["s8", "s7"]);
}

#[test]
fn test_placement_drive_stable() {
    let result = allocate(&drive_students(), &drive_companies(), Strategy::Stable);

    // Arjun E. (8.9) evicts the earliest of the two 8.7 holders at Tesla,
    // who then falls back to L&T.
    assert_eq!(
        pairs(&result),
        vec![
            ("s2", "c1"),
            ("s1", "c1"),
            ("s6", "c4"),
            ("s4", "c5"),
            ("s5", "c5"),
            ("s3", "c6"),
        ]
    );
    assert_eq!(leftover_ids(&result), vec!["s7", "s8"]);
    assert_eq!(result.displacements.len(), 1);
    assert_eq!(result.displacements[0].evicted_id, "s3");
    assert_eq!(result.displacements[0].admitted_id, "s5");
}

#[test]
fn test_placement_drive_summary() {
    let result = allocate(&drive_students(), &drive_companies(), Strategy::Stable);
    let summary = RunSummary::from_result(&result);

    assert_eq!(summary.total_candidates, 8);
    assert_eq!(summary.placed, 6);
    assert!((summary.placement_rate - 0.75).abs() < 1e-12);
    let expected_avg = (9.1 + 9.4 + 6.8 + 8.7 + 8.9 + 8.7) / 6.0;
    assert!((summary.average_merit_placed - expected_avg).abs() < 1e-12);
    assert_eq!(summary.placed_by_category.get("EEE"), Some(&2));

    let tesla = &summary.utilization[3];
    assert_eq!(tesla.slot_type_name, "Tesla");
    assert_eq!((tesla.filled, tesla.capacity), (2, 2));

    let microsoft = &result.slot_fill[1];
    assert_eq!((microsoft.filled, microsoft.remaining), (0, 4));
}

#[test]
fn test_placement_drive_demand() {
    let demand = preference_demand(&drive_students(), &drive_companies(), 3);
    let counts: Vec<(&str, usize)> = demand
        .iter()
        .map(|d| (d.slot_type_id.as_str(), d.demand))
        .collect();

    assert_eq!(
        counts,
        vec![("c1", 3), ("c2", 2), ("c4", 3), ("c5", 4), ("c6", 2)]
    );
}

#[test]
fn test_strict_mode_reports_unknown_company() {
    let config = AllocConfig::default().with_strict(true);
    let err = allocate_with(&config, &drive_students(), &drive_companies()).unwrap_err();

    match err {
        AllocError::InvalidInput(issues) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(
                issues[0].to_string(),
                "candidate `s8` prefers unknown slot type `c3`"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}
