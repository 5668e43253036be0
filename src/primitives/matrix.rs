//! Square matrices of exact integers.
//!
//! ## Purpose
//!
//! This module provides the storage for the Hodge square: a dense, row-major
//! `size × size` matrix of `BigInt` entries, with an identity constructor, a
//! column flip for display orientation, and a bracketed pretty printer.
//!
//! ## Design notes
//!
//! * **Row-major**: Entry `(row, col)` lives at `row * size + col`.
//! * **Exact**: Entries are arbitrary-precision integers; `to_i64_rows` is a
//!   convenience for small values.
//! * **Printing**: Columns are centred to their widest entry and separated by
//!   two spaces, framed by tall brackets.
//!
//! ## Invariants
//!
//! * `entries.len() == size * size`.
//!
//! ## Non-goals
//!
//! * This module does not provide general linear algebra (products, inverses).

use core::fmt;

// External dependencies
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

// ============================================================================
// SquareMatrix
// ============================================================================

/// Dense square matrix of arbitrary-precision integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    size: usize,
    entries: Vec<BigInt>,
}

impl SquareMatrix {
    /// Create a `size × size` matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            entries: vec![BigInt::zero(); size * size],
        }
    }

    /// Create the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.entries[i * size + i] = BigInt::one();
        }
        m
    }

    /// Build a matrix from rows of small integers.
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let entries = rows
            .iter()
            .flat_map(|r| r.iter().map(|&v| BigInt::from(v)))
            .collect();
        Some(Self { size, entries })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &BigInt {
        assert!(row < self.size && col < self.size, "index out of range");
        &self.entries[row * self.size + col]
    }

    /// Overwrite the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: BigInt) {
        assert!(row < self.size && col < self.size, "index out of range");
        self.entries[row * self.size + col] = value;
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[BigInt]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.entries.chunks(self.size.max(1))
    }

    /// Reverse the column order: `flipped(p, q) = self(p, size - 1 - q)`.
    pub fn flip_columns(&self) -> Self {
        let n = self.size;
        let mut flipped = Self::zeros(n);
        for p in 0..n {
            for q in 0..n {
                flipped.entries[p * n + q] = self.entries[p * n + (n - 1 - q)].clone();
            }
        }
        flipped
    }

    /// Rotate by 180 degrees: `rotated(p, q) = self(size - 1 - p, size - 1 - q)`.
    pub fn rotate_half_turn(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.reverse();
        Self {
            size: self.size,
            entries,
        }
    }

    /// Convert every entry to `i64`, or `None` if any entry does not fit.
    pub fn to_i64_rows(&self) -> Option<Vec<Vec<i64>>> {
        self.rows()
            .map(|row| row.iter().map(|v| v.to_i64()).collect::<Option<Vec<i64>>>())
            .collect()
    }
}

// ============================================================================
// Pretty Printing
// ============================================================================

/// Pad `text` to `width`, centred, extra space on the right.
fn centre(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        if n == 0 {
            return f.write_str("[]");
        }

        let cells: Vec<String> = self.entries.iter().map(|v| v.to_string()).collect();
        let widths: Vec<usize> = (0..n)
            .map(|q| {
                (0..n)
                    .map(|p| cells[p * n + q].chars().count())
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        let lines: Vec<String> = (0..n)
            .map(|p| {
                (0..n)
                    .map(|q| centre(&cells[p * n + q], widths[q]))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect();

        if n == 1 {
            return write!(f, "[{}]", lines[0]);
        }

        let blank = " ".repeat(lines[0].chars().count());
        for (p, line) in lines.iter().enumerate() {
            if p == 0 {
                writeln!(f, "⎡{}⎤", line)?;
            } else if p == n - 1 {
                write!(f, "⎣{}⎦", line)?;
            } else {
                writeln!(f, "⎢{}⎥", line)?;
            }
            if p + 1 < n {
                writeln!(f, "⎢{}⎥", blank)?;
            }
        }
        Ok(())
    }
}
