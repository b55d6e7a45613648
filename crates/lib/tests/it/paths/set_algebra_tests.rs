//! Union, intersection and difference tests

use fieldpath::{Set, path};

use crate::helpers::{assert_set_eq, name_key, overlapping_sets};

#[test]
fn test_set_union() {
    let s1 = Set::new_from([
        path!("foo", 0),
        path!("foo"),
        path!("bar", "baz"),
        path!("qux", name_key("first")),
    ]);

    let s2 = Set::new_from([
        path!("foo", 1),
        path!("bar", "baz"),
        path!("bar"),
        path!("qux", name_key("second")),
    ]);

    let expected = Set::new_from([
        path!("foo", 0),
        path!("foo", 1),
        path!("foo"),
        path!("bar", "baz"),
        path!("bar"),
        path!("qux", name_key("first")),
        path!("qux", name_key("second")),
    ]);

    assert_set_eq(&s1.union(&s2), &expected, "union");
    assert_set_eq(&s2.union(&s1), &expected, "reversed union");
}

#[test]
fn test_set_intersection() {
    let (s1, s2) = overlapping_sets();

    let expected = Set::new_from([
        path!("a1"),
        path!("foo", 1),
        path!("b1", name_key("first")),
    ]);

    assert_set_eq(&s1.intersection(&s2), &expected, "s1 intersect s2");
    assert_set_eq(&s2.intersection(&s1), &expected, "s2 intersect s1");
}

#[test]
fn test_set_difference() {
    let (s1, s2) = overlapping_sets();

    let s1_minus_s2 = Set::new_from([
        path!("a0"),
        path!("foo", 0),
        path!("b0", name_key("first")),
        path!("bar", "c0"),
    ]);
    assert_set_eq(&s1.difference(&s2), &s1_minus_s2, "s1 - s2");

    let s2_minus_s1 = Set::new_from([
        path!("a2"),
        path!("foo", 2),
        path!("b2", name_key("first")),
        path!("bar", "c2"),
    ]);
    assert_set_eq(&s2.difference(&s1), &s2_minus_s1, "s2 - s1");
}

#[test]
fn test_keyed_intersection_and_difference() {
    let a = Set::new_from([
        path!("foo", 0),
        path!("foo", 1),
        path!("b1", name_key("first")),
    ]);
    let b = Set::new_from([
        path!("foo", 1),
        path!("foo", 2),
        path!("b1", name_key("first")),
        path!("b2", name_key("first")),
    ]);

    assert_set_eq(
        &a.intersection(&b),
        &Set::new_from([path!("foo", 1), path!("b1", name_key("first"))]),
        "a intersect b",
    );
    assert_set_eq(&a.difference(&b), &Set::new_from([path!("foo", 0)]), "a - b");
    assert_set_eq(
        &b.difference(&a),
        &Set::new_from([path!("foo", 2), path!("b2", name_key("first"))]),
        "b - a",
    );
}

#[test]
fn test_disjoint_intersection_is_structurally_empty() {
    let a = Set::new_from([path!("x", 0, "a"), path!("y", name_key("k"), "b")]);
    let b = Set::new_from([path!("x", 0, "b"), path!("y", name_key("k"), "a")]);

    let i = a.intersection(&b);
    assert!(i.is_empty());
    assert_eq!(i.children().count(), 0);
    assert_set_eq(&i, &Set::new(), "disjoint intersection");
}

#[test]
fn test_difference_ignores_keys_only_in_other() {
    let a = Set::new_from([path!("x", "a")]);
    let b = Set::new_from([path!("y", "a"), path!("x", "b", "c")]);
    assert_set_eq(&a.difference(&b), &a, "nothing removed");
}

#[test]
fn test_difference_with_ancestor_member_removes_only_exact_path() {
    let a = Set::new_from([path!("spec"), path!("spec", "replicas")]);
    let b = Set::new_from([path!("spec")]);
    assert_set_eq(
        &a.difference(&b),
        &Set::new_from([path!("spec", "replicas")]),
        "exact removal",
    );
    assert_set_eq(&a.recursive_difference(&b), &Set::new(), "recursive removal");
}

#[test]
fn test_operands_are_not_mutated() {
    let (s1, s2) = overlapping_sets();
    let (s1_before, s2_before) = (s1.clone(), s2.clone());

    let _ = s1.union(&s2);
    let _ = s1.intersection(&s2);
    let _ = s1.difference(&s2);
    let _ = s2.difference(&s1);
    let _ = s1.recursive_difference(&s2);
    let _ = s1.leaves();

    assert_set_eq(&s1, &s1_before, "s1 unchanged");
    assert_set_eq(&s2, &s2_before, "s2 unchanged");
}

#[test]
fn test_shared_across_threads() {
    let (s1, s2) = overlapping_sets();
    let s1 = std::sync::Arc::new(s1);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s1 = s1.clone();
            let s2 = s2.clone();
            std::thread::spawn(move || s1.intersection(&s2))
        })
        .collect();

    let expected = s1.intersection(&s2);
    for handle in handles {
        let result = handle.join().unwrap();
        assert_set_eq(&result, &expected, "concurrent intersection");
    }
}
