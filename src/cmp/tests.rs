use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use super::{compare, ge, gt, le, lt};

const MINUS_ONE: Option<i32> = Some(-1);
const ZERO: Option<i32> = Some(0);
const ONE: Option<i32> = Some(1);
const NONE: Option<i32> = None;

// ── Inference across operand shapes ─────────────────────────────

#[test]
fn operand_shapes_infer_without_annotations() {
    let a = Some(1);
    let b = Some(2);
    assert!(lt(a, b));
    assert!(le(a, a));
    assert!(ge(b, a));
    assert!(lt(a, 2));
    assert!(gt(2, a));
}

// ── Some vs bare ────────────────────────────────────────────────

#[test]
fn some_compares_against_bare_values() {
    assert!(lt(MINUS_ONE, 0));
    assert!(lt(ZERO, 1));
    assert!(lt(ONE, 2));
    assert!(lt(-2, MINUS_ONE));
    assert!(lt(-1, ZERO));
    assert!(lt(0, ONE));
}

// ── None vs bare ────────────────────────────────────────────────

#[test]
fn none_is_below_every_bare_value() {
    assert!(lt(NONE, -1));
    assert!(lt(NONE, 0));
    assert!(lt(NONE, 1));
    assert!(!lt(-1, NONE));
    assert!(!lt(0, NONE));
    assert!(!lt(1, NONE));
}

// ── Some vs Some ────────────────────────────────────────────────

#[test]
fn present_values_use_inner_ordering() {
    assert!(lt(MINUS_ONE, ZERO));
    assert!(lt(MINUS_ONE, ONE));
    assert!(lt(ZERO, ONE));
    assert!(gt(ONE, ZERO));
}

// ── Some vs None ────────────────────────────────────────────────

#[test]
fn none_is_below_every_present_value() {
    assert!(!lt(MINUS_ONE, NONE));
    assert!(!lt(ZERO, NONE));
    assert!(!lt(ONE, NONE));
    assert!(lt(NONE, MINUS_ONE));
    assert!(lt(NONE, ZERO));
    assert!(lt(NONE, ONE));
}

// ── compare / non-strict predicates ─────────────────────────────

#[test]
fn compare_covers_all_operand_shapes() {
    assert_eq!(compare(NONE, NONE), Ordering::Equal);
    assert_eq!(compare(NONE, ZERO), Ordering::Less);
    assert_eq!(compare(ZERO, NONE), Ordering::Greater);
    assert_eq!(compare(ZERO, ZERO), Ordering::Equal);
    assert_eq!(compare(MINUS_ONE, 0), Ordering::Less);
}

#[test]
fn non_strict_predicates_include_equality() {
    assert!(le(NONE, NONE));
    assert!(le(ZERO, 0));
    assert!(ge(ZERO, 0));
    assert!(ge(ZERO, NONE));
    assert!(!ge(NONE, ZERO));
}

#[test]
fn works_for_non_numeric_inner_types() {
    assert!(lt(Some("apple"), "banana"));
    assert!(lt(None::<&str>, "apple"));
}
