use rand::SeedableRng;
use rand::rngs::StdRng;
use sortkit::array::{self, number};
use sortkit::{SortError, Value};

#[test]
fn test_split_on() {
    assert_eq!(
        array::split_on(&[1, 2, 3, 4, 5], 2).unwrap(),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
    assert_eq!(
        array::split_on(&[1, 2, 3, 4], 2).unwrap(),
        vec![vec![1, 2], vec![3, 4]]
    );
    // A falsy remainder is kept like any other.
    assert_eq!(
        array::split_on(&[1, 2, 0], 2).unwrap(),
        vec![vec![1, 2], vec![0]]
    );
    assert!(array::split_on::<i32>(&[], 3).unwrap().is_empty());
    assert!(matches!(
        array::split_on(&[1], 0),
        Err(SortError::InvalidArgument { .. })
    ));
}

#[test]
fn test_split_to() {
    assert_eq!(
        array::split_to(&["a", "b", "c"], 2).unwrap(),
        vec![vec!["a", "b"], vec!["c"]]
    );
    assert!(array::split_to(&[1], 0).is_err());
}

#[test]
fn test_random_and_shuffle() {
    let mut rng = StdRng::seed_from_u64(3);
    let v = [10, 20, 30];

    assert!(v.contains(array::random_with(&v, &mut rng).unwrap()));
    assert!(array::random::<i32>(&[]).is_none());

    let mut shuffled = array::shuffle_with(&v, &mut rng);
    shuffled.sort();
    assert_eq!(shuffled, v.to_vec());
    assert_eq!(array::shuffle(&v).len(), 3);
}

#[test]
fn test_insert_and_last() {
    assert_eq!(array::insert(vec![1, 3], 1, 2), vec![1, 2, 3]);
    assert_eq!(array::insert(vec![1, 2], 99, 3), vec![1, 2, 3]);
    assert_eq!(array::last(&[1, 2, 3]), Some(&3));
    assert_eq!(array::last::<i32>(&[]), None);
}

#[test]
fn test_make_unique_keeps_first_occurrence() {
    assert_eq!(array::make_unique(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn test_remove_false_values() {
    let input = vec![
        Value::from(0),
        Value::from(1),
        Value::Number(f64::NAN),
        Value::from(""),
        Value::from("x"),
        Value::from(false),
        Value::Null,
        Value::Undefined,
        Value::Array(Vec::new()),
    ];
    assert_eq!(
        array::remove_false_values(input),
        vec![Value::from(1), Value::from("x"), Value::Array(Vec::new())]
    );
}

#[test]
fn test_generate() {
    assert_eq!(array::generate(3, || 7), vec![7, 7, 7]);
    assert!(array::generate(0, || 7).is_empty());
}

#[test]
fn test_number_aggregates() {
    let v = [3.0, -1.5, 10.0];
    assert_eq!(number::min(&v), -1.5);
    assert_eq!(number::max(&v), 10.0);
    assert_eq!(number::total(&v), 11.5);
    assert_eq!(number::average(&[2.0, 4.0]), Some(3.0));

    assert_eq!(number::min(&[]), f64::INFINITY);
    assert_eq!(number::max(&[]), f64::NEG_INFINITY);
    assert_eq!(number::average(&[]), None);
    assert!(number::max(&[1.0, f64::NAN]).is_nan());
}
