use std::cmp::Ordering;
use std::time::Duration;

use sortkit::{
    Algorithm, CloneBenchmark, CloneMethod, SortBenchmark, SortEngine, SortError, Value,
};

#[test]
fn test_report_covers_every_algorithm() {
    let input = vec![3, 1, 2];
    let report = SortBenchmark::new().run_by(&input, |a, b| a.cmp(b));

    let ids: Vec<Algorithm> = report.summary.iter().map(|t| t.id).collect();
    assert_eq!(ids, Algorithm::ALL.to_vec());
    assert_eq!(report.sorted, vec![1, 2, 3]);
    assert_eq!(report.source, input);
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_report_totals_and_extremes() {
    let input: Vec<i32> = (0..300).rev().collect();
    let report = SortBenchmark::new().run_by(&input, |a, b| a.cmp(b));

    let total: Duration = report.summary.iter().map(|t| t.elapsed).sum();
    assert_eq!(report.total_time, total);

    assert!(report.fastest.rate <= report.slowest.rate);
    let min = report.summary.iter().map(|t| t.elapsed).min().unwrap();
    assert_eq!(report.fastest.rate, min);
    assert_eq!(report.elapsed(report.fastest.id), Some(min));

    for timing in &report.summary {
        assert!(timing.elapsed >= report.fastest.rate);
        assert!(timing.elapsed <= report.slowest.rate || report.slowest.rate == Duration::ZERO);
    }

    assert!((report.fastest.rate_ms() - report.fastest.rate.as_secs_f64() * 1000.0).abs() < 1e-9);
}

#[test]
fn test_subset_of_algorithms() {
    let bench = SortBenchmark::with_algorithms([Algorithm::Merge, Algorithm::Heap]);
    let report = bench.run_by(&[5, 4, 3], |a, b| a.cmp(b));

    assert_eq!(report.summary.len(), 2);
    assert_eq!(report.elapsed(Algorithm::Merge), Some(report.summary[0].elapsed));
    assert_eq!(report.elapsed(Algorithm::Quick), None);
    assert!(matches!(report.fastest.id, Algorithm::Merge | Algorithm::Heap));
}

#[test]
fn test_empty_input() {
    let report = SortBenchmark::new().run_by(&Vec::<i32>::new(), |a, b| a.cmp(b));
    assert_eq!(report.summary.len(), 11);
    assert!(report.sorted.is_empty());
}

#[test]
fn test_default_comparator_benchmark() {
    let report = SortBenchmark::new().run(&[10, 9, 1]).unwrap();
    assert_eq!(report.sorted, vec![1, 10, 9]);
}

#[test]
fn test_default_comparator_error_aborts_run() {
    let input = vec![Value::from(1), Value::Symbol("id".into())];
    let err = SortBenchmark::new().run(&input).unwrap_err();
    assert!(matches!(err, SortError::NotStringable { kind: "symbol" }));
}

#[test]
fn test_comparator_error_propagates() {
    #[derive(Debug, PartialEq)]
    struct Refused;

    let result = SortBenchmark::new().try_run_by(&[2, 1], |_: &i32, _: &i32| {
        Err::<Ordering, _>(Refused)
    });
    assert_eq!(result.unwrap_err(), Refused);
}

#[test]
fn test_report_serializes_algorithm_names() {
    let report = SortBenchmark::with_algorithms([Algorithm::SimpleCounting])
        .run_by(&[1], |a, b| a.cmp(b));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"][0]["id"], "simpleCounting");
    assert_eq!(json["sorted"], serde_json::json!([1]));
}

#[test]
fn test_clone_benchmark_copies_input() {
    let input = vec![
        Value::from(1),
        Value::from("two"),
        Value::from(vec![Value::from(3), Value::Null]),
    ];
    let report = CloneBenchmark::new().run(&input).unwrap();

    let ids: Vec<CloneMethod> = report.summary.iter().map(|t| t.id).collect();
    assert_eq!(ids, CloneMethod::ALL.to_vec());
    assert_eq!(report.copied, input);
    assert_eq!(report.source, input);

    let total: Duration = report.summary.iter().map(|t| t.elapsed).sum();
    assert_eq!(report.total_time, total);
    assert!(report.fastest.rate <= report.slowest.rate);
}

#[test]
fn test_clone_benchmark_json_failure() {
    // NaN encodes as null, which does not decode back into a float.
    let err = CloneBenchmark::new().run(&[1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, SortError::Json(_)));

    let report = CloneBenchmark::with_methods([CloneMethod::Slice, CloneMethod::RecursionDeep])
        .run(&[1.0, 2.5])
        .unwrap();
    assert_eq!(report.summary.len(), 2);
    assert_eq!(report.copied, vec![1.0, 2.5]);
}

#[test]
fn test_engine_benchmarks_configured_lists() {
    let config = sortkit::SortConfig {
        algorithms: vec![Algorithm::Quick],
        clone_methods: vec![CloneMethod::Json],
        ..Default::default()
    };
    let engine = SortEngine::with_config(config).unwrap();

    let report = engine.benchmark_by(&[2, 1], |a, b| a.cmp(b));
    assert_eq!(report.summary.len(), 1);
    assert_eq!(report.fastest.id, Algorithm::Quick);

    let report = engine.clone_benchmark(&[1, 2, 3]).unwrap();
    assert_eq!(report.summary.len(), 1);
    assert_eq!(report.copied, vec![1, 2, 3]);
}
