use std::ops::{Index, IndexMut};

/// Dense row-major `n x n` table indexed by `(row, column)`
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    order: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates an `order x order` matrix with every cell set to `value`
    pub fn filled(order: usize, value: T) -> Self {
        SquareMatrix {
            order,
            cells: vec![value; order * order],
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Builds a matrix from a generator called in row-major order
    pub fn from_fn<F>(order: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(order * order);
        for row in 0..order {
            for column in 0..order {
                cells.push(cell(row, column));
            }
        }
        SquareMatrix { order, cells }
    }

    /// Number of rows (and columns)
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.order && column < self.order {
            self.cells.get(row * self.order + column)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Iterates over rows as slices
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        // chunks(0) panics, and an empty matrix has no rows either way
        self.cells.chunks(self.order.max(1))
    }

    /// Raw row-major storage, for row-parallel updates
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        debug_assert!(column < self.order, "column {} out of range", column);
        &self.cells[row * self.order + column]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        debug_assert!(column < self.order, "column {} out of range", column);
        &mut self.cells[row * self.order + column]
    }
}
