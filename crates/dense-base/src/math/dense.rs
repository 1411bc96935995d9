//! The capability set the matrix helpers are written against.
//!
//! Any row/column-addressable numeric container can take part in the
//! shuffle, sigmoid and formatting helpers by implementing `DenseMatrix`.
//! Only `dims`, `at`, `set` and `zeros` are required; the row-level
//! methods fall back to element access and can be overridden by types
//! with contiguous row storage.

/// A fixed-size 2D container with O(1) element access.
pub trait DenseMatrix {
    type Elem: Copy;

    /// `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Read the element at `(row, col)`. Panics when out of bounds.
    fn at(&self, row: usize, col: usize) -> Self::Elem;

    /// Write the element at `(row, col)`. Panics when out of bounds.
    fn set(&mut self, row: usize, col: usize, value: Self::Elem);

    /// Allocate a zero-initialised `rows x cols` matrix.
    fn zeros(rows: usize, cols: usize) -> Self
    where
        Self: Sized;

    /// Copy row `row` into `dst`, which must hold exactly `cols` values.
    fn copy_row(&self, row: usize, dst: &mut [Self::Elem]) {
        let (_, cols) = self.dims();
        assert_eq!(dst.len(), cols, "row buffer length must equal column count");
        for (col, slot) in dst.iter_mut().enumerate() {
            *slot = self.at(row, col);
        }
    }

    /// Overwrite row `row` with `src`, which must hold exactly `cols` values.
    fn set_row(&mut self, row: usize, src: &[Self::Elem]) {
        let (_, cols) = self.dims();
        assert_eq!(src.len(), cols, "row buffer length must equal column count");
        for (col, &value) in src.iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Exchange rows `a` and `b`, staging row `a` in `scratch`.
    fn swap_rows(&mut self, a: usize, b: usize, scratch: &mut [Self::Elem]) {
        if a == b {
            return;
        }
        self.copy_row(a, scratch);
        let (_, cols) = self.dims();
        for col in 0..cols {
            let value = self.at(b, col);
            self.set(a, col, value);
        }
        self.set_row(b, scratch);
    }
}
