//! A square bitboard whose side length is chosen at runtime.
//!
//! Cells are packed row-major into a vector of unsigned words `T`. The board
//! uses it to track the set of excluded coordinates.

use alloc::vec::Vec;
use core::{fmt, mem};

use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bitboard operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Column or row index is outside [0..size).
    #[error("IndexOutOfBounds: x={x}, y={y}")]
    IndexOutOfBounds { x: usize, y: usize },
}

/// An `size×size` set of cells stored as bits in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    words: Vec<T>,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty board of `size×size` cells.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitBoard {
            size,
            words: alloc::vec![T::zero(); len],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(x, y)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the bit at (x, y). Returns whether it was previously clear.
    pub fn set(&mut self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(x, y)?;
        let mask = T::one() << bit;
        let was_clear = (self.words[word] & mask).is_zero();
        self.words[word] = self.words[word] | mask;
        Ok(was_clear)
    }

    /// Clears all bits.
    #[inline]
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = T::zero());
    }

    /// Iterator over the `(x, y)` positions of set bits, row by row.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        (0..size * size).filter_map(move |idx| {
            let (x, y) = (idx % size, idx / size);
            match self.get(x, y) {
                Ok(true) => Some((x, y)),
                _ => None,
            }
        })
    }

    #[inline]
    fn locate(&self, x: usize, y: usize) -> Result<(usize, usize), BitBoardError> {
        if x >= self.size || y >= self.size {
            return Err(BitBoardError::IndexOutOfBounds { x, y });
        }
        let idx = y * self.size + x;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}> {}x{}:", core::any::type_name::<T>(), self.size, self.size)?;
        for y in 0..self.size {
            for x in 0..self.size {
                let bit = if self.get(x, y).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
