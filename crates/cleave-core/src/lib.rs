#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for cleave.
//!
//! - **Code point sets** (`CodePointSet`): immutable sorted lists of disjoint,
//!   non-adjacent inclusive ranges over the Unicode scalar values. These are
//!   the transition guards the canonicalizer splits and unions.
//! - **Scratch buffers** (`CompilationBuffer`): reusable storage threaded through
//!   set operations so a hot loop allocates only for its results.
//! - **Colors**: ANSI palette for the CLI and trace output.

pub mod buffer;
pub mod charset;
pub mod class;
pub mod colors;

mod invariants;

#[cfg(test)]
mod charset_tests;

pub use buffer::CompilationBuffer;
pub use charset::{
    CodePointSet, CodeRange, IntersectAndSubtract, MAX_CODE_POINT, SURROGATE_HI, SURROGATE_LO,
};
pub use class::CharSetError;
pub use colors::Colors;
