//! End-to-end scan and consume scenarios in both directions

use wordedge_core::{consume_first_word, scan, BoundaryTable, CoreError, ScanDirection};

const SAMPLE: &str = "Hello, world! This is a test.";

#[test]
fn test_scan_forward() {
    let table = scan(SAMPLE, ScanDirection::Forward);
    assert_eq!(table, [5, 12, 18, 21, 23, 28, 29]);
}

#[test]
fn test_scan_backward() {
    let table = scan(SAMPLE, ScanDirection::Backward);
    assert_eq!(table, [5, 7, 10, 15, 22, 29]);
}

#[test]
fn test_scan_punctuation_only() {
    assert_eq!(scan(": , .", ScanDirection::Forward), [5]);
    assert_eq!(scan(": , .", ScanDirection::Backward), [5]);
}

#[test]
fn test_scan_empty_string() {
    assert_eq!(scan("", ScanDirection::Forward), [0]);
    assert_eq!(scan("", ScanDirection::Backward), [0]);
}

#[test]
fn test_scan_punctuation_separated_by_whitespace() {
    assert_eq!(scan("foo ... bar", ScanDirection::Forward), [3, 11]);
}

#[test]
fn test_scan_ending_in_punctuation() {
    assert_eq!(scan("foo ...", ScanDirection::Forward), [3, 7]);
}

#[test]
fn test_consume_punctuation_after_first_word_forward() {
    let mut text = String::from(SAMPLE);
    let mut table = scan(&text, ScanDirection::Forward);
    assert_eq!(table.len(), 7);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
    assert_eq!(removed, 7); // "Hello, "
    assert_eq!(text, "world! This is a test.");
    assert_eq!(table, [5, 11, 14, 16, 21, 22]);
}

#[test]
fn test_consume_backward() {
    let mut text = String::from(SAMPLE);
    let mut table = scan(&text, ScanDirection::Backward);
    assert_eq!(table.len(), 6);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Backward).unwrap();
    assert_eq!(removed, 6); // " test."
    assert_eq!(text, "Hello, world! This is a");
    assert_eq!(table, [1, 4, 9, 16, 23]);
}

#[test]
fn test_consume_in_parenthesis_forward() {
    let mut text = String::from("(Hello) world");
    let mut table = scan(&text, ScanDirection::Forward);
    assert_eq!(table.len(), 2);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
    assert_eq!(removed, 8); // "(Hello) "
    assert_eq!(text, "world");
    assert_eq!(table, [5]);
}

#[test]
fn test_consume_in_parenthesis_backward() {
    let mut text = String::from("Hello (world)");
    let mut table = scan(&text, ScanDirection::Backward);
    assert_eq!(table.len(), 2);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Backward).unwrap();
    assert_eq!(removed, 8); // " (world)"
    assert_eq!(text, "Hello");
    assert_eq!(table, [5]);
}

#[test]
fn test_consume_multiple_punctuation_forward() {
    let mut text = String::from("...foo!!! bar?");
    let mut table = scan(&text, ScanDirection::Forward);
    assert_eq!(table, [6, 13, 14]);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
    assert_eq!(removed, 10); // "...foo!!! "
    assert_eq!(text, "bar?");
    assert_eq!(table, [3, 4]);
}

#[test]
fn test_consume_multiple_punctuation_backward() {
    let mut text = String::from("foo!!! ...bar");
    let mut table = scan(&text, ScanDirection::Backward);
    assert_eq!(table.len(), 2);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Backward).unwrap();
    assert_eq!(removed, 10); // "!!! ...bar"
    assert_eq!(text, "foo");
    assert_eq!(table, [3]);
}

#[test]
fn test_consume_ends_in_punctuation_forward() {
    let mut text = String::from("foo ...");
    let mut table = scan(&text, ScanDirection::Forward);
    assert_eq!(table, [3, 7]);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
    assert_eq!(removed, 7); // "foo ..."
    assert_eq!(text, "foo ...");
    assert!(table.is_empty());
}

#[test]
fn test_consume_with_hand_built_table() {
    let mut text = String::from("foo ...");
    let mut table = BoundaryTable::from([3, 7]);

    let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
    assert_eq!(removed, 7);
    assert_eq!(text, "foo ...");
    assert!(table.is_empty());
}

#[test]
fn test_consume_after_exhaustion_fails() {
    let mut text = String::from("foo ...");
    let mut table = scan(&text, ScanDirection::Forward);
    consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();

    let result = consume_first_word(&mut text, &mut table, ScanDirection::Forward);
    assert_eq!(result, Err(CoreError::InvalidState));
}

#[test]
fn test_consume_until_exhausted_forward() {
    let mut text = String::from(SAMPLE);
    let mut table = scan(&text, ScanDirection::Forward);
    let mut steps = Vec::new();

    while !table.is_empty() {
        let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
        steps.push((removed, text.clone()));
    }

    assert_eq!(
        steps,
        vec![
            (7, "world! This is a test.".to_string()),
            (7, "This is a test.".to_string()),
            (5, "is a test.".to_string()),
            (3, "a test.".to_string()),
            (2, "test.".to_string()),
            (5, "test.".to_string()),
        ]
    );
}

#[test]
fn test_consume_until_exhausted_backward() {
    let mut text = String::from(SAMPLE);
    let mut table = scan(&text, ScanDirection::Backward);
    let mut steps = Vec::new();

    while !table.is_empty() {
        let removed = consume_first_word(&mut text, &mut table, ScanDirection::Backward).unwrap();
        steps.push((removed, text.clone()));
    }

    assert_eq!(
        steps,
        vec![
            (6, "Hello, world! This is a".to_string()),
            (2, "Hello, world! This is".to_string()),
            (3, "Hello, world! This".to_string()),
            (6, "Hello, world".to_string()),
            (7, "Hello".to_string()),
            (5, "Hello".to_string()),
        ]
    );
}

#[test]
fn test_incremental_table_matches_rescan() {
    for direction in [ScanDirection::Forward, ScanDirection::Backward] {
        let mut text = String::from("  (one) two, three... four!? five ");
        let mut table = scan(&text, direction);

        while table.len() > 2 {
            consume_first_word(&mut text, &mut table, direction).unwrap();
            assert_eq!(table, scan(&text, direction), "direction {direction}");
        }
    }
}
