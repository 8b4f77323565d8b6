use proptest::{collection, prelude::*};
use regex_syntax::hir::{ClassUnicode, ClassUnicodeRange};

use crate::{
    CodePointSet, CodeRange, CompilationBuffer, MAX_CODE_POINT, SURROGATE_HI, SURROGATE_LO,
};

fn set(ranges: &[(char, char)]) -> CodePointSet {
    ranges
        .iter()
        .map(|&(lo, hi)| CodeRange::new(lo as u32, hi as u32))
        .collect()
}

#[test]
fn from_ranges_sorts_and_coalesces() {
    let s = set(&[('x', 'z'), ('a', 'c'), ('b', 'f'), ('g', 'g')]);
    assert_eq!(
        s.ranges(),
        &[
            CodeRange::new('a' as u32, 'g' as u32),
            CodeRange::new('x' as u32, 'z' as u32)
        ]
    );
}

#[test]
fn predicates() {
    assert!(CodePointSet::empty().matches_nothing());
    assert!(!CodePointSet::empty().matches_something());
    assert!(CodePointSet::full().matches_everything());
    assert!(CodePointSet::from_char('q').matches_single_char());
    assert!(!set(&[('a', 'b')]).matches_single_char());

    let s = set(&[('a', 'c'), ('x', 'z')]);
    assert!(s.contains('b' as u32));
    assert!(s.contains('z' as u32));
    assert!(!s.contains('d' as u32));
    assert_eq!(s.size(), 6);
}

#[test]
fn intersect_and_subtract_partial_overlap() {
    let mut buf = CompilationBuffer::new();
    let a = set(&[('a', 'c')]);
    let b = set(&[('b', 'd')]);

    let r = a.intersect_and_subtract(&b, &mut buf);
    assert_eq!(r.intersection, set(&[('b', 'c')]));
    assert_eq!(r.subtracted_a, set(&[('a', 'a')]));
    assert_eq!(r.subtracted_b, set(&[('d', 'd')]));
}

#[test]
fn intersect_and_subtract_containment() {
    let mut buf = CompilationBuffer::new();
    let outer = set(&[('a', 'z')]);
    let inner = set(&[('g', 'm'), ('p', 'p')]);

    let r = inner.intersect_and_subtract(&outer, &mut buf);
    assert_eq!(r.intersection, inner);
    assert!(r.subtracted_a.matches_nothing());
    assert_eq!(r.subtracted_b, set(&[('a', 'f'), ('n', 'o'), ('q', 'z')]));
}

#[test]
fn intersect_and_subtract_one_range_spans_many() {
    let mut buf = CompilationBuffer::new();
    let a = set(&[('a', 'b'), ('e', 'f'), ('i', 'j')]);
    let b = set(&[('b', 'i')]);

    let r = a.intersect_and_subtract(&b, &mut buf);
    assert_eq!(r.intersection, set(&[('b', 'b'), ('e', 'f'), ('i', 'i')]));
    assert_eq!(r.subtracted_a, set(&[('a', 'a'), ('j', 'j')]));
    assert_eq!(r.subtracted_b, set(&[('c', 'd'), ('g', 'h')]));
}

#[test]
fn intersect_and_subtract_at_alphabet_edges() {
    let mut buf = CompilationBuffer::new();
    let full = CodePointSet::full();
    let top = CodePointSet::from_range(MAX_CODE_POINT - 1, MAX_CODE_POINT);

    let r = full.intersect_and_subtract(&top, &mut buf);
    assert_eq!(r.intersection, top);
    assert_eq!(r.subtracted_a, CodePointSet::from_range(0, MAX_CODE_POINT - 2));
    assert!(r.subtracted_b.matches_nothing());
}

#[test]
fn union_merges_adjacent() {
    let mut buf = CompilationBuffer::new();
    let a = set(&[('a', 'c'), ('x', 'x')]);
    let b = set(&[('d', 'f'), ('z', 'z')]);

    assert_eq!(a.union(&b, &mut buf), set(&[('a', 'f'), ('x', 'x'), ('z', 'z')]));
    assert_eq!(a.union(&CodePointSet::empty(), &mut buf), a);
    assert_eq!(CodePointSet::empty().union(&b, &mut buf), b);
}

#[test]
fn intersects_and_contains_set() {
    let a = set(&[('a', 'c'), ('x', 'z')]);
    assert!(a.intersects(&set(&[('c', 'd')])));
    assert!(!a.intersects(&set(&[('d', 'w')])));
    assert!(a.contains_set(&set(&[('b', 'c'), ('y', 'y')])));
    assert!(!a.contains_set(&set(&[('c', 'd')])));
    assert!(a.contains_set(&CodePointSet::empty()));
}

#[test]
#[should_panic(expected = "invalid range")]
fn code_range_rejects_inverted() {
    CodeRange::new(5, 4);
}

// Property tests against regex-syntax's class algebra.

fn arb_set() -> impl Strategy<Value = CodePointSet> {
    collection::vec((0u32..200, 0u32..12), 0..6).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(lo, len)| CodeRange::new(lo, lo + len))
            .collect()
    })
}

fn to_class(s: &CodePointSet) -> ClassUnicode {
    ClassUnicode::new(s.ranges().iter().map(|r| {
        ClassUnicodeRange::new(
            char::from_u32(r.lo).unwrap(),
            char::from_u32(r.hi).unwrap(),
        )
    }))
}

fn from_class(c: &ClassUnicode) -> CodePointSet {
    c.ranges()
        .iter()
        .map(|r| CodeRange::new(r.start() as u32, r.end() as u32))
        .collect()
}

proptest! {
    #[test]
    fn split_matches_oracle(a in arb_set(), b in arb_set()) {
        let mut buf = CompilationBuffer::new();
        let r = a.intersect_and_subtract(&b, &mut buf);

        let mut inter = to_class(&a);
        inter.intersect(&to_class(&b));
        let mut a_minus_b = to_class(&a);
        a_minus_b.difference(&to_class(&b));
        let mut b_minus_a = to_class(&b);
        b_minus_a.difference(&to_class(&a));

        prop_assert_eq!(r.intersection, from_class(&inter));
        prop_assert_eq!(r.subtracted_a, from_class(&a_minus_b));
        prop_assert_eq!(r.subtracted_b, from_class(&b_minus_a));
    }

    #[test]
    fn union_matches_oracle(a in arb_set(), b in arb_set()) {
        let mut buf = CompilationBuffer::new();
        let mut expected = to_class(&a);
        expected.union(&to_class(&b));
        prop_assert_eq!(a.union(&b, &mut buf), from_class(&expected));
    }

    #[test]
    fn intersects_agrees_with_split(a in arb_set(), b in arb_set()) {
        let mut buf = CompilationBuffer::new();
        let split = a.intersect_and_subtract(&b, &mut buf);
        prop_assert_eq!(a.intersects(&b), split.intersection.matches_something());
    }
}

#[test]
fn touches_detects_adjacency_and_overlap() {
    let abc = set(&[('a', 'c')]);
    assert!(abc.touches(&set(&[('d', 'd')])));
    assert!(set(&[('d', 'd')]).touches(&abc));
    assert!(abc.touches(&set(&[('b', 'b')])));
    assert!(!abc.touches(&set(&[('e', 'z')])));
    assert!(!abc.touches(&CodePointSet::empty()));
}

#[test]
fn constructors_drop_surrogates() {
    let across = CodePointSet::from_range(0xD000, 0xE100);
    assert_eq!(
        across.ranges(),
        &[
            CodeRange::new(0xD000, SURROGATE_LO - 1),
            CodeRange::new(SURROGATE_HI + 1, 0xE100)
        ]
    );
    assert!(CodePointSet::from_range(SURROGATE_LO, SURROGATE_HI).matches_nothing());
    assert_eq!(CodePointSet::full().size(), MAX_CODE_POINT + 1 - 0x800);
    assert!(!CodePointSet::full().contains(SURROGATE_LO));
}

#[test]
fn gap_neighbors_stay_separate_ranges() {
    let mut buf = CompilationBuffer::new();
    let below = CodePointSet::from_range(0xD7F0, SURROGATE_LO - 1);
    let above = CodePointSet::from_range(SURROGATE_HI + 1, 0xE010);

    let joined = below.union(&above, &mut buf);

    assert_eq!(joined.ranges().len(), 2);
    assert_eq!(joined, CodePointSet::from_range(0xD7F0, 0xE010));
    assert!(!below.touches(&above));
}

fn arb_set_near_surrogates() -> impl Strategy<Value = CodePointSet> {
    collection::vec((0xD7E0u32..0xE020, 0u32..48), 0..5).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(lo, len)| CodeRange::new(lo, lo + len))
            .collect()
    })
}

proptest! {
    #[test]
    fn class_text_round_trips_near_surrogates(a in arb_set_near_surrogates()) {
        let text = a.to_string();
        let parsed = CodePointSet::parse_class(&text);
        prop_assert!(parsed.is_ok(), "{} failed to parse: {:?}", text, parsed);
        prop_assert_eq!(parsed.unwrap(), a);
    }

    #[test]
    fn remainders_round_trip_near_surrogates(
        a in arb_set_near_surrogates(),
        b in arb_set_near_surrogates(),
    ) {
        let mut buf = CompilationBuffer::new();
        let split = a.intersect_and_subtract(&b, &mut buf);
        for piece in [split.intersection, split.subtracted_a, split.subtracted_b] {
            prop_assert!(piece.ranges().iter().all(|r| !r.overlaps_surrogates()));
            prop_assert_eq!(CodePointSet::parse_class(&piece.to_string()).unwrap(), piece);
        }
    }
}
