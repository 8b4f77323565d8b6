//! Sorted interval sets over the code point alphabet.
//!
//! A `CodePointSet` is the guard of a transition: the symbols that enable it.
//! Sets are immutable once built. Every operation returns a fresh set, so
//! "shrinking" a guard means rebinding a field to the remainder.
//!
//! The alphabet is the Unicode scalar values: `0..=0x10FFFF` without the
//! surrogate block `0xD800..=0xDFFF`. Constructors drop surrogates, so every
//! set can be written as a class and parsed back.
//!
//! Representation invariant: ranges are sorted by `lo`, no two ranges
//! overlap or touch (`prev.hi + 1 < next.lo`), and no range reaches into the
//! surrogate block. Two sets are therefore equal iff their range lists are
//! equal.

use std::fmt;

use crate::buffer::CompilationBuffer;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// First UTF-16 surrogate. Not a scalar value.
pub const SURROGATE_LO: u32 = 0xD800;

/// Last UTF-16 surrogate.
pub const SURROGATE_HI: u32 = 0xDFFF;

const BELOW_SURROGATES: CodeRange = CodeRange {
    lo: 0,
    hi: SURROGATE_LO - 1,
};

const ABOVE_SURROGATES: CodeRange = CodeRange {
    lo: SURROGATE_HI + 1,
    hi: MAX_CODE_POINT,
};

/// Inclusive code point range `lo..=hi`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeRange {
    pub lo: u32,
    pub hi: u32,
}

impl CodeRange {
    /// # Panics
    /// Panics if `lo > hi` or `hi > MAX_CODE_POINT`.
    #[inline]
    pub fn new(lo: u32, hi: u32) -> Self {
        Self::ensure_valid(lo, hi);
        Self { lo, hi }
    }

    #[inline]
    pub fn single(cp: u32) -> Self {
        Self::new(cp, cp)
    }

    /// Number of code points covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.hi - self.lo + 1
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp <= self.hi
    }

    /// Whether any code point of the range is a surrogate.
    #[inline]
    pub fn overlaps_surrogates(&self) -> bool {
        self.lo <= SURROGATE_HI && SURROGATE_LO <= self.hi
    }

    /// The parts of the range below and above the surrogate block.
    fn scalar_parts(self) -> [Option<CodeRange>; 2] {
        let below = (self.lo < SURROGATE_LO).then(|| CodeRange {
            lo: self.lo,
            hi: self.hi.min(SURROGATE_LO - 1),
        });
        let above = (self.hi > SURROGATE_HI).then(|| CodeRange {
            lo: self.lo.max(SURROGATE_HI + 1),
            hi: self.hi,
        });
        [below, above]
    }

    /// Whether `next` starts at most one past the end of `self`.
    #[inline]
    fn touches(&self, next: &CodeRange) -> bool {
        next.lo <= self.hi.saturating_add(1)
    }
}

impl fmt::Debug for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo == self.hi {
            write!(f, "{:#x}", self.lo)
        } else {
            write!(f, "{:#x}-{:#x}", self.lo, self.hi)
        }
    }
}

/// Result of [`CodePointSet::intersect_and_subtract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectAndSubtract {
    /// `a ∩ b`
    pub intersection: CodePointSet,
    /// `a \ b`
    pub subtracted_a: CodePointSet,
    /// `b \ a`
    pub subtracted_b: CodePointSet,
}

/// Immutable set of code points stored as sorted, disjoint, non-adjacent ranges.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    ranges: Box<[CodeRange]>,
}

impl CodePointSet {
    /// The set matching nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The set matching every scalar value.
    pub fn full() -> Self {
        Self {
            ranges: Box::new([BELOW_SURROGATES, ABOVE_SURROGATES]),
        }
    }

    /// `lo..=hi` without any surrogates it spans.
    pub fn from_range(lo: u32, hi: u32) -> Self {
        Self::from_ranges([CodeRange::new(lo, hi)])
    }

    pub fn from_char(c: char) -> Self {
        Self::from_range(c as u32, c as u32)
    }

    /// Build a set from arbitrary ranges, sorting and coalescing them.
    /// Surrogates are dropped.
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodeRange>) -> Self {
        let mut ranges: Vec<CodeRange> = ranges
            .into_iter()
            .flat_map(CodeRange::scalar_parts)
            .flatten()
            .collect();
        ranges.sort_unstable();

        let mut normalized: Vec<CodeRange> = Vec::with_capacity(ranges.len());
        for r in ranges {
            match normalized.last_mut() {
                Some(last) if last.touches(&r) => last.hi = last.hi.max(r.hi),
                _ => normalized.push(r),
            }
        }
        Self {
            ranges: normalized.into_boxed_slice(),
        }
    }

    /// Wrap ranges that are already normalized. Checked in debug builds.
    pub(crate) fn from_sorted(ranges: &[CodeRange]) -> Self {
        Self::debug_ensure_normalized(ranges);
        Self {
            ranges: ranges.into(),
        }
    }

    #[inline]
    pub fn ranges(&self) -> &[CodeRange] {
        &self.ranges
    }

    #[inline]
    pub fn matches_nothing(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn matches_something(&self) -> bool {
        !self.ranges.is_empty()
    }

    pub fn matches_everything(&self) -> bool {
        self.ranges[..] == [BELOW_SURROGATES, ABOVE_SURROGATES]
    }

    /// Whether the set is exactly one code point.
    pub fn matches_single_char(&self) -> bool {
        matches!(*self.ranges, [r] if r.lo == r.hi)
    }

    /// Binary search for `cp`.
    pub fn contains(&self, cp: u32) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if r.hi < cp {
                    std::cmp::Ordering::Less
                } else if r.lo > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Number of code points in the set.
    pub fn size(&self) -> u32 {
        self.ranges.iter().map(CodeRange::len).sum()
    }

    /// Split `self` (a) against `other` (b) in one sweep.
    ///
    /// Returns `a ∩ b`, `a \ b` and `b \ a`. All three results are normalized
    /// because both inputs are: two output pieces could only touch if one of
    /// the inputs had touching ranges.
    pub fn intersect_and_subtract(
        &self,
        other: &CodePointSet,
        buf: &mut CompilationBuffer,
    ) -> IntersectAndSubtract {
        let (inter, sub_a, sub_b) = buf.split_vecs();

        let a = &self.ranges;
        let b = &other.ranges;
        let (mut i, mut j) = (0, 0);
        // Cursors hold the not-yet-consumed tail of the current range.
        let mut cur_a = a.first().copied();
        let mut cur_b = b.first().copied();

        loop {
            match (cur_a, cur_b) {
                (None, None) => break,
                (Some(ra), None) => {
                    sub_a.push(ra);
                    i += 1;
                    cur_a = a.get(i).copied();
                }
                (None, Some(rb)) => {
                    sub_b.push(rb);
                    j += 1;
                    cur_b = b.get(j).copied();
                }
                (Some(ra), Some(rb)) if ra.hi < rb.lo => {
                    sub_a.push(ra);
                    i += 1;
                    cur_a = a.get(i).copied();
                }
                (Some(ra), Some(rb)) if rb.hi < ra.lo => {
                    sub_b.push(rb);
                    j += 1;
                    cur_b = b.get(j).copied();
                }
                (Some(ra), Some(rb)) => {
                    if ra.lo < rb.lo {
                        sub_a.push(CodeRange::new(ra.lo, rb.lo - 1));
                    } else if rb.lo < ra.lo {
                        sub_b.push(CodeRange::new(rb.lo, ra.lo - 1));
                    }
                    let lo = ra.lo.max(rb.lo);
                    let hi = ra.hi.min(rb.hi);
                    inter.push(CodeRange::new(lo, hi));

                    if ra.hi > hi {
                        cur_a = Some(CodeRange::new(hi + 1, ra.hi));
                    } else {
                        i += 1;
                        cur_a = a.get(i).copied();
                    }
                    if rb.hi > hi {
                        cur_b = Some(CodeRange::new(hi + 1, rb.hi));
                    } else {
                        j += 1;
                        cur_b = b.get(j).copied();
                    }
                }
            }
        }

        IntersectAndSubtract {
            intersection: Self::from_sorted(inter),
            subtracted_a: Self::from_sorted(sub_a),
            subtracted_b: Self::from_sorted(sub_b),
        }
    }

    /// Union of two sets, merging overlapping and adjacent ranges.
    pub fn union(&self, other: &CodePointSet, buf: &mut CompilationBuffer) -> CodePointSet {
        if self.matches_nothing() {
            return other.clone();
        }
        if other.matches_nothing() {
            return self.clone();
        }

        let out = buf.single_vec();
        let mut push = |r: CodeRange| match out.last_mut() {
            Some(last) if last.touches(&r) => last.hi = last.hi.max(r.hi),
            _ => out.push(r),
        };

        let (a, b) = (&self.ranges, &other.ranges);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            if a[i].lo <= b[j].lo {
                push(a[i]);
                i += 1;
            } else {
                push(b[j]);
                j += 1;
            }
        }
        a[i..].iter().chain(&b[j..]).for_each(|&r| push(r));

        Self::from_sorted(out)
    }

    /// `self ∩ other`.
    pub fn intersect(&self, other: &CodePointSet, buf: &mut CompilationBuffer) -> CodePointSet {
        self.intersect_and_subtract(other, buf).intersection
    }

    /// `self \ other`.
    pub fn subtract(&self, other: &CodePointSet, buf: &mut CompilationBuffer) -> CodePointSet {
        self.intersect_and_subtract(other, buf).subtracted_a
    }

    /// Whether the two sets share at least one code point. Allocation-free.
    pub fn intersects(&self, other: &CodePointSet) -> bool {
        let (a, b) = (&self.ranges, &other.ranges);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            if a[i].hi < b[j].lo {
                i += 1;
            } else if b[j].hi < a[i].lo {
                j += 1;
            } else {
                return true;
            }
        }
        false
    }

    /// Whether the sets overlap or some range of one ends right before a
    /// range of the other starts, i.e. their union has fewer ranges than
    /// the two sets combined.
    pub fn touches(&self, other: &CodePointSet) -> bool {
        self.ranges.iter().any(|a| {
            other
                .ranges
                .iter()
                .any(|b| a.touches(b) && b.touches(a))
        })
    }

    /// Whether every code point of `other` is also in `self`.
    pub fn contains_set(&self, other: &CodePointSet) -> bool {
        other.ranges.iter().all(|r| {
            self.ranges
                .iter()
                .any(|s| s.lo <= r.lo && r.hi <= s.hi)
        })
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePointSet({self})")
    }
}

impl FromIterator<CodeRange> for CodePointSet {
    fn from_iter<T: IntoIterator<Item = CodeRange>>(iter: T) -> Self {
        Self::from_ranges(iter)
    }
}

impl FromIterator<char> for CodePointSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::from_ranges(iter.into_iter().map(|c| CodeRange::single(c as u32)))
    }
}
