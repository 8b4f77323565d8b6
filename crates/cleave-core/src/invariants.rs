//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::charset::{CodePointSet, CodeRange, MAX_CODE_POINT};

impl CodeRange {
    #[inline]
    pub(crate) fn ensure_valid(lo: u32, hi: u32) {
        if lo > hi || hi > MAX_CODE_POINT {
            panic!("CodeRange: invalid range {lo:#x}..={hi:#x} (must be lo <= hi <= {MAX_CODE_POINT:#x})");
        }
    }
}

impl CodePointSet {
    #[inline]
    pub(crate) fn debug_ensure_normalized(ranges: &[CodeRange]) {
        if cfg!(debug_assertions) {
            for pair in ranges.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                assert!(
                    prev.hi.saturating_add(1) < next.lo,
                    "CodePointSet: ranges {prev:?} and {next:?} overlap or touch \
                     (set operations must produce normalized output)"
                );
            }
            for r in ranges {
                assert!(
                    !r.overlaps_surrogates(),
                    "CodePointSet: range {r:?} reaches into the surrogate block"
                );
            }
        }
    }
}
