//! Integration tests for the hydrocast-forecast engine.

use approx::assert_relative_eq;
use hydrocast_calendar::Month;
use hydrocast_forecast::{
    ClimateTable, FeasibilityStatus, ForecastError, MonthlyClimateInput, MonthlyForecastRecord,
    RiverProfile, aggregate, compute_monthly_forecast, forecast_table, order_by_calendar,
    run_forecast,
};

/// Twelve months of tropical climate with a wet season peaking in January.
fn full_year() -> ClimateTable {
    let rain = [
        320.0, 280.0, 260.0, 190.0, 130.0, 80.0, 60.0, 50.0, 70.0, 140.0, 230.0, 300.0,
    ];
    let temp = [
        26.0, 26.2, 26.5, 27.0, 27.3, 27.0, 26.8, 27.1, 27.6, 27.8, 27.0, 26.4,
    ];
    let hum = [
        86.0, 85.0, 84.0, 82.0, 80.0, 76.0, 73.0, 70.0, 71.0, 75.0, 81.0, 85.0,
    ];
    ClimateTable::from_inputs(
        Month::ALL
            .iter()
            .enumerate()
            .map(|(i, &m)| MonthlyClimateInput::new(m, rain[i], temp[i], hum[i])),
    )
    .unwrap()
}

fn flow_record(month: Month, flow: f64) -> MonthlyForecastRecord {
    MonthlyForecastRecord::new(month, 0.0, 0.0, 0.0, flow, 0.0)
}

// ---------------------------------------------------------------------------
// 1. Reference values
// ---------------------------------------------------------------------------

#[test]
fn reference_case_matches_hand_calculation() {
    let river = RiverProfile::new("Citarum", 5.0, 10.0);
    let input = MonthlyClimateInput::new(Month::January, 200.0, 27.0, 75.0);
    let rec = compute_monthly_forecast(&river, &input).unwrap();

    // 5.0 * (1 + 0.2 - 0.27 + 0.0015)
    assert_relative_eq!(rec.forecast_flow(), 4.6575, epsilon = 1e-9);
    // 1000 * 9.81 * 4.6575 * 10 / 1000
    assert_relative_eq!(rec.forecast_power(), 456.90075, epsilon = 1e-2);
}

#[test]
fn unit_river_end_to_end() {
    let river = RiverProfile::new("Unit", 1.0, 1.0);
    let table =
        ClimateTable::from_inputs([MonthlyClimateInput::new(Month::April, 0.0, 0.0, 0.0)])
            .unwrap();
    let run = run_forecast(&river, &table).unwrap();

    let rec = run.records()[0];
    assert_relative_eq!(rec.forecast_flow(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(rec.forecast_power(), 9.81, epsilon = 1e-12);

    let verdict = run.summary().verdict();
    assert_relative_eq!(verdict.average_flow(), 1.0, epsilon = 1e-12);
    assert_eq!(verdict.status(), FeasibilityStatus::Feasible);
}

// ---------------------------------------------------------------------------
// 2. Purity and ordering
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_bit_identical() {
    let river = RiverProfile::new("Brantas", 3.7, 22.5);
    let input = MonthlyClimateInput::new(Month::October, 143.2, 28.1, 77.7);
    let a = compute_monthly_forecast(&river, &input).unwrap();
    let b = compute_monthly_forecast(&river, &input).unwrap();
    assert_eq!(a.forecast_flow().to_bits(), b.forecast_flow().to_bits());
    assert_eq!(a.forecast_power().to_bits(), b.forecast_power().to_bits());
}

#[test]
fn records_cover_exactly_the_selected_months() {
    let river = RiverProfile::new("Progo", 4.0, 12.0);
    let table = ClimateTable::from_inputs([
        MonthlyClimateInput::new(Month::September, 70.0, 27.0, 70.0),
        MonthlyClimateInput::new(Month::February, 280.0, 26.0, 85.0),
        MonthlyClimateInput::new(Month::June, 90.0, 27.0, 76.0),
    ])
    .unwrap();
    let recs = forecast_table(&river, &table).unwrap();
    let months: Vec<Month> = recs.iter().map(|r| r.month()).collect();
    assert_eq!(months, table.months().collect::<Vec<_>>());
}

#[test]
fn each_record_independent_of_other_months() {
    let river = RiverProfile::new("Serayu", 6.0, 15.0);
    let table = full_year();
    let all = forecast_table(&river, &table).unwrap();
    for rec in &all {
        let input = table.get(rec.month()).unwrap();
        let alone = compute_monthly_forecast(&river, input).unwrap();
        assert_eq!(*rec, alone, "record for {} differs", rec.month());
    }
}

#[test]
fn aggregate_is_permutation_invariant() {
    let river = RiverProfile::new("Serayu", 6.0, 15.0);
    let recs = forecast_table(&river, &full_year()).unwrap();
    let forward = aggregate(&recs).unwrap();

    let mut reversed = recs.clone();
    reversed.reverse();
    let backward = aggregate(&reversed).unwrap();

    let mut rotated = recs.clone();
    rotated.rotate_left(5);
    let shifted = aggregate(&rotated).unwrap();

    for other in [backward, shifted] {
        assert_eq!(forward.average_flow().to_bits(), other.average_flow().to_bits());
        assert_eq!(forward.status(), other.status());
    }
}

/// All orderings of `0..n`.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for p in permutations(n - 1) {
        for pos in 0..=p.len() {
            let mut q = p.clone();
            q.insert(pos, n - 1);
            out.push(q);
        }
    }
    out
}

#[test]
fn aggregate_at_feasible_threshold_ignores_order() {
    // These flows average to 1.0 only up to rounding, which depends on the
    // summation order.
    let recs = [
        flow_record(Month::January, 0.3),
        flow_record(Month::February, 0.4),
        flow_record(Month::March, 2.1),
        flow_record(Month::April, 1.2),
    ];
    let orders = permutations(recs.len());
    assert_eq!(orders.len(), 24);

    let first = aggregate(&recs).unwrap();
    for order in orders {
        let shuffled: Vec<MonthlyForecastRecord> = order.iter().map(|&i| recs[i]).collect();
        let v = aggregate(&shuffled).unwrap();
        assert_eq!(v.average_flow().to_bits(), first.average_flow().to_bits());
        assert_eq!(v.status(), first.status());
    }
}

#[test]
fn order_by_calendar_is_idempotent() {
    let recs = vec![
        flow_record(Month::December, 1.0),
        flow_record(Month::March, 2.0),
        flow_record(Month::August, 3.0),
        flow_record(Month::January, 4.0),
    ];
    let once = order_by_calendar(&recs);
    let twice = order_by_calendar(&once);
    assert_eq!(once, twice);
    let months: Vec<Month> = once.iter().map(|r| r.month()).collect();
    assert_eq!(
        months,
        vec![Month::January, Month::March, Month::August, Month::December]
    );
}

#[test]
fn order_by_calendar_keeps_equal_months_stable() {
    let recs = vec![
        flow_record(Month::May, 1.0),
        flow_record(Month::January, 9.0),
        flow_record(Month::May, 2.0),
    ];
    let ordered = order_by_calendar(&recs);
    assert_eq!(ordered[1].forecast_flow(), 1.0);
    assert_eq!(ordered[2].forecast_flow(), 2.0);
}

// ---------------------------------------------------------------------------
// 3. Feasibility boundaries
// ---------------------------------------------------------------------------

#[test]
fn feasibility_boundaries() {
    let cases = [
        (5.0, FeasibilityStatus::HighlyFeasible),
        (1.0, FeasibilityStatus::Feasible),
        (0.999999, FeasibilityStatus::LowFeasible),
        (-2.5, FeasibilityStatus::LowFeasible),
    ];
    for (flow, expected) in cases {
        let v = aggregate(&[flow_record(Month::January, flow)]).unwrap();
        assert_eq!(v.status(), expected, "average flow {flow}");
    }
}

#[test]
fn boundary_reached_through_mean() {
    let recs = [
        flow_record(Month::January, 4.0),
        flow_record(Month::February, 6.0),
    ];
    let v = aggregate(&recs).unwrap();
    assert_eq!(v.status(), FeasibilityStatus::HighlyFeasible);
}

// ---------------------------------------------------------------------------
// 4. Errors
// ---------------------------------------------------------------------------

#[test]
fn aggregate_empty_is_error() {
    assert!(matches!(aggregate(&[]), Err(ForecastError::EmptySelection)));
}

#[test]
fn zero_base_flow_is_invalid_profile() {
    let river = RiverProfile::new("Dry", 0.0, 10.0);
    let input = MonthlyClimateInput::new(Month::January, 200.0, 27.0, 75.0);
    assert!(matches!(
        compute_monthly_forecast(&river, &input),
        Err(ForecastError::InvalidProfile { .. })
    ));
}

#[test]
fn duplicate_month_is_rejected() {
    let result = ClimateTable::from_inputs([
        MonthlyClimateInput::new(Month::July, 1.0, 1.0, 1.0),
        MonthlyClimateInput::new(Month::July, 2.0, 2.0, 2.0),
    ]);
    assert_eq!(
        result.unwrap_err(),
        ForecastError::DuplicateMonth { month: Month::July }
    );
}

// ---------------------------------------------------------------------------
// 5. Reentrancy
// ---------------------------------------------------------------------------

#[test]
fn concurrent_runs_do_not_interfere() {
    let table = full_year();
    let rivers: Vec<RiverProfile> = (1..=4)
        .map(|i| RiverProfile::new(format!("River {i}"), i as f64, 10.0 * i as f64))
        .collect();
    let sequential: Vec<_> = rivers
        .iter()
        .map(|r| run_forecast(r, &table).unwrap())
        .collect();

    let shared = &table;
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = rivers
            .iter()
            .map(|r| s.spawn(move || run_forecast(r, shared).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
