//! # tallylib
//!
//! A library for counting the elements of a sequence that satisfy a
//! predicate, across sequence representations.
//!
//! ## Overview
//!
//! Plain collections (slices, vectors, arrays) are counted by direct
//! positional access. Accessor collections — strided views over a backing
//! buffer, complex numbers stored as interleaved components — cannot hand
//! out a contiguous slice, so their elements are materialized through a
//! resolved getter instead. [`count_if`] inspects the representation once
//! per call and walks the sequence with the matching strategy; both
//! strategies produce identical counts for element-equivalent inputs.
//!
//! ## Features
//!
//! - **Representation dispatch**: one entry point over direct and
//!   accessor-backed sequences
//! - **Predicate state**: closure capture, or an explicitly threaded
//!   context via [`count_if_with`]
//! - **Strided and complex views**: bounds checked at construction, cheap
//!   to copy, no allocation
//! - **Text predicates**: [`ValueTest`] and [`ComplexTest`] parse predicate
//!   expressions for data-driven callers
//! - **Input loading**: JSON arrays or numeric text, from files or readers
//!
//! ## Example
//!
//! ```rust
//! use tallylib::{count_if, ComplexSlice, ComplexTest};
//!
//! // Plain sequences count by direct indexing.
//! let values = vec![0.0, 1.0, 0.0, 1.0, 2.0];
//! assert_eq!(count_if(&values, |v, _| *v > 0.0), 3);
//!
//! // Accessor sequences resolve a getter per element.
//! let parts = [0.0, 0.0, 1.0, 0.0, 3.0, 4.0, 0.0, 5.0];
//! let numbers = ComplexSlice::new(&parts)?;
//! assert_eq!(count_if(&numbers, |z, _| z.re > 0.0 && z.im > 0.0), 1);
//!
//! // Predicates parsed from text for data-driven callers.
//! let test: ComplexTest = "re>0,im>0".parse()?;
//! assert_eq!(count_if(&numbers, |z, _| test.matches(*z)), 1);
//! # Ok::<(), tallylib::TallyError>(())
//! ```

pub mod count;
pub mod error;
pub mod input;
pub mod predicate;
pub mod sequence;
pub mod views;

pub use count::{count_if, count_if_with, summarize, CountSummary};
pub use error::TallyError;
pub use input::{parse_values, read_values, read_values_from, InputFormat};
pub use predicate::{ComplexTest, ValueTest};
pub use sequence::{Accessor, Elements, Sequence};
pub use views::{ComplexSlice, Strided};

/// Result type for tallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
