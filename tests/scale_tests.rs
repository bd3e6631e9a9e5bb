use rand::Rng;
use sortkit::algo::*;
use sortkit::core::is_sorted_by;
use sortkit::Algorithm;

fn random_strings(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

#[test]
fn test_sub_quadratic_sorts_100k() {
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..100_000).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in [Algorithm::Shell, Algorithm::Comb, Algorithm::Merge, Algorithm::Heap] {
        let sorted = algorithm.sort_by(input.clone(), |a, b| a.cmp(b));
        assert_eq!(sorted, expected, "{algorithm} failed on 100k elements");
    }
}

#[test]
fn test_quick_sort_50k_random_strings() {
    let input = random_strings(50_000);
    let mut expected = input.clone();
    expected.sort();

    assert_eq!(quick_sort_by(input, |a, b| a.cmp(b)), expected);
}

#[test]
fn test_quick_sort_presorted_inputs() {
    // First-element pivot: both orders are quadratic, and the reverse sorted input nests
    // one partition per element.
    let ascending: Vec<i32> = (0..2_000).collect();
    assert_eq!(quick_sort_by(ascending.clone(), |a, b| a.cmp(b)), ascending);

    let descending: Vec<i32> = (0..20_000).rev().collect();
    let sorted = quick_sort_by(descending, |a, b| a.cmp(b));
    assert_eq!(sorted, (0..20_000).collect::<Vec<_>>());
}

#[test]
fn test_quick_sort_benchmark_on_reverse_input() {
    let input: Vec<i32> = (0..20_000).rev().collect();
    let report = sortkit::SortBenchmark::with_algorithms([Algorithm::Quick])
        .run_by(&input, |a, b| a.cmp(b));

    assert!(is_sorted_by(&report.sorted, |a, b| a.cmp(b)));
    assert_eq!(report.sorted.len(), 20_000);
}

#[test]
fn test_default_comparator_10k_strings() {
    let input = random_strings(10_000);
    let sorted = Algorithm::Merge.sort(input).unwrap();
    assert!(is_sorted_by(&sorted, |a, b| a.cmp(b)));
}

#[test]
#[ignore]
fn test_quadratic_sorts_20k() {
    // Quadratic sorts take several seconds each at this size.
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..20_000).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort_by(input.clone(), |a, b| a.cmp(b));
        assert_eq!(sorted, expected, "{algorithm} failed on 20k elements");
    }
}
