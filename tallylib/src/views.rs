//! Accessor-backed sequence views.
//!
//! These are the collection types that cannot hand out a contiguous slice:
//! [`Strided`] reads a spaced-out selection of a backing buffer, and
//! [`ComplexSlice`] materializes complex numbers from interleaved component
//! storage. Both enforce their input contracts at construction and trust
//! them in the getter.

use num_complex::Complex;
use num_traits::Float;

use crate::error::TallyError;
use crate::sequence::{Accessor, Elements, Sequence};
use crate::Result;

/// A view of `len` elements over a backing slice, starting at `offset` and
/// stepping by `stride`.
///
/// Negative strides walk the buffer backward from the offset. Bounds are
/// checked once at construction; element reads trust them.
///
/// # Example
///
/// ```rust
/// use tallylib::{count_if, Strided};
///
/// let buffer = [1.0, -1.0, 2.0, -2.0, 3.0, -3.0];
/// // Every other element, starting at position 0: [1.0, 2.0, 3.0]
/// let view = Strided::new(&buffer, 3, 2, 0)?;
/// assert_eq!(count_if(&view, |v, _| *v > 1.5), 2);
/// # Ok::<(), tallylib::TallyError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    data: &'a [T],
    len: usize,
    stride: isize,
    offset: usize,
}

impl<'a, T: Copy> Strided<'a, T> {
    /// Create a strided view.
    ///
    /// Fails with [`TallyError::ZeroStride`] if `stride` is zero, and with
    /// [`TallyError::RangeOutOfBounds`] if any of the `len` element
    /// positions falls outside `data`.
    pub fn new(data: &'a [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        if stride == 0 {
            return Err(TallyError::ZeroStride);
        }
        if len > 0 {
            let first = offset as isize;
            let last = offset as isize + (len as isize - 1) * stride;
            for position in [first, last] {
                if position < 0 || position as usize >= data.len() {
                    return Err(TallyError::RangeOutOfBounds {
                        position,
                        len: data.len(),
                    });
                }
            }
        }
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Step between consecutive elements.
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Buffer position of the first element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn position(&self, index: usize) -> usize {
        (self.offset as isize + index as isize * self.stride) as usize
    }
}

impl<T: Copy> Accessor for Strided<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> T {
        debug_assert!(index < self.len);
        self.data[self.position(index)]
    }
}

impl<T: Copy> Sequence for Strided<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn elements(&self) -> Elements<'_, T> {
        // A unit-stride view is just a sub-slice; let it count directly.
        if self.stride == 1 {
            Elements::Direct(&self.data[self.offset..self.offset + self.len])
        } else {
            Elements::Accessed(self)
        }
    }
}

/// A complex-number sequence stored as interleaved components.
///
/// The backing buffer holds `[re, im, re, im, ...]`; the logical sequence
/// holds `parts.len() / 2` complex elements, materialized through the
/// getter as [`num_complex::Complex`] values.
///
/// # Example
///
/// ```rust
/// use tallylib::{count_if, ComplexSlice};
///
/// let parts = [0.0, 0.0, 1.0, 0.0, 3.0, 4.0, 0.0, 5.0];
/// let numbers = ComplexSlice::new(&parts)?;
/// assert_eq!(count_if(&numbers, |z, _| z.re > 0.0 && z.im > 0.0), 1);
/// # Ok::<(), tallylib::TallyError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComplexSlice<'a, T> {
    parts: &'a [T],
}

impl<'a, T: Float> ComplexSlice<'a, T> {
    /// Wrap an interleaved component buffer.
    ///
    /// Fails with [`TallyError::OddInterleaved`] if the buffer length is
    /// odd.
    pub fn new(parts: &'a [T]) -> Result<Self> {
        if parts.len() % 2 != 0 {
            return Err(TallyError::OddInterleaved { len: parts.len() });
        }
        Ok(Self { parts })
    }

    /// Component buffer backing this view.
    pub fn parts(&self) -> &'a [T] {
        self.parts
    }
}

impl<T: Float> Accessor for ComplexSlice<'_, T> {
    type Item = Complex<T>;

    fn len(&self) -> usize {
        self.parts.len() / 2
    }

    fn get(&self, index: usize) -> Complex<T> {
        Complex::new(self.parts[2 * index], self.parts[2 * index + 1])
    }
}

impl<T: Float> Sequence for ComplexSlice<'_, T> {
    type Item = Complex<T>;

    fn len(&self) -> usize {
        self.parts.len() / 2
    }

    fn elements(&self) -> Elements<'_, Complex<T>> {
        Elements::Accessed(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_forward() {
        let buffer = [10, 20, 30, 40, 50, 60];
        let view = Strided::new(&buffer, 3, 2, 0).unwrap();
        assert_eq!(Accessor::len(&view), 3);
        assert_eq!(view.get(0), 10);
        assert_eq!(view.get(1), 30);
        assert_eq!(view.get(2), 50);
    }

    #[test]
    fn test_strided_with_offset() {
        let buffer = [10, 20, 30, 40, 50, 60];
        let view = Strided::new(&buffer, 3, 2, 1).unwrap();
        assert_eq!(view.get(0), 20);
        assert_eq!(view.get(2), 60);
    }

    #[test]
    fn test_strided_backward() {
        let buffer = [10, 20, 30, 40];
        let view = Strided::new(&buffer, 4, -1, 3).unwrap();
        assert_eq!(view.get(0), 40);
        assert_eq!(view.get(3), 10);
    }

    #[test]
    fn test_strided_zero_stride_rejected() {
        let buffer = [1, 2, 3];
        let err = Strided::new(&buffer, 3, 0, 0).unwrap_err();
        assert!(matches!(err, TallyError::ZeroStride));
    }

    #[test]
    fn test_strided_out_of_bounds_rejected() {
        let buffer = [1, 2, 3];
        // Last element would sit at position 4.
        let err = Strided::new(&buffer, 3, 2, 0).unwrap_err();
        assert!(matches!(
            err,
            TallyError::RangeOutOfBounds { position: 4, len: 3 }
        ));

        // Walking backward past the front of the buffer.
        let err = Strided::new(&buffer, 3, -2, 1).unwrap_err();
        assert!(matches!(err, TallyError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn test_strided_empty_ignores_bounds() {
        let buffer: [i32; 0] = [];
        let view = Strided::new(&buffer, 0, 1, 0).unwrap();
        assert_eq!(Accessor::len(&view), 0);
    }

    #[test]
    fn test_strided_unit_stride_is_direct() {
        let buffer = [1, 2, 3, 4];
        let contiguous = Strided::new(&buffer, 2, 1, 1).unwrap();
        match contiguous.elements() {
            Elements::Direct(items) => assert_eq!(items, &[2, 3]),
            Elements::Accessed(_) => panic!("unit stride should expose a sub-slice"),
        }

        let spaced = Strided::new(&buffer, 2, 2, 0).unwrap();
        assert!(matches!(spaced.elements(), Elements::Accessed(_)));
    }

    #[test]
    fn test_complex_slice_pairs() {
        let parts = [1.0, 2.0, 3.0, 4.0];
        let numbers = ComplexSlice::new(&parts).unwrap();
        assert_eq!(Accessor::len(&numbers), 2);
        assert_eq!(numbers.get(0), Complex::new(1.0, 2.0));
        assert_eq!(numbers.get(1), Complex::new(3.0, 4.0));
    }

    #[test]
    fn test_complex_slice_odd_length_rejected() {
        let parts = [1.0, 2.0, 3.0];
        let err = ComplexSlice::new(&parts).unwrap_err();
        assert!(matches!(err, TallyError::OddInterleaved { len: 3 }));
    }

    #[test]
    fn test_complex_slice_is_accessed() {
        let parts: [f64; 4] = [0.0, 0.0, 1.0, 1.0];
        let numbers = ComplexSlice::new(&parts).unwrap();
        assert!(matches!(numbers.elements(), Elements::Accessed(_)));
    }
}
