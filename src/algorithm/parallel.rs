//! # Parallel row operations
//!
//! The elimination step of a pivot updates every row independently, once the pivot row has been
//! normalized. Large tableaus hand that work to an executor that splits the rows into disjoint
//! ranges.
use rayon::join;

/// Applies an operation to every row of a contiguous range of rows.
///
/// Implementations guarantee that each row in the range is visited exactly once before
/// `for_each_row` returns, and that no two concurrent invocations of the operation receive the
/// same row.
pub trait RowRangeExecutor {
    /// Apply `operation` to every row.
    ///
    /// # Arguments
    ///
    /// * `first`: Index of `rows[0]` in the complete collection of rows. The range processed is
    /// `first..first + rows.len()`.
    /// * `rows`: Rows to apply the operation to.
    /// * `operation`: Receives the (global) row index and the row.
    fn for_each_row<R, Op>(&self, first: usize, rows: &mut [R], operation: &Op)
    where
        R: Send,
        Op: Fn(usize, &mut R) + Sync,
    ;
}

/// Processes all rows on the calling thread.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sequential;

impl RowRangeExecutor for Sequential {
    fn for_each_row<R, Op>(&self, first: usize, rows: &mut [R], operation: &Op)
    where
        R: Send,
        Op: Fn(usize, &mut R) + Sync,
    {
        for (i, row) in rows.iter_mut().enumerate() {
            operation(first + i, row);
        }
    }
}

/// Recursively halves the range of rows and processes both halves with `rayon::join`.
#[derive(Copy, Clone, Debug)]
pub struct DivideAndConquer {
    /// Ranges of at most this many rows are processed sequentially.
    grain: usize,
}

impl DivideAndConquer {
    /// Create a new executor.
    ///
    /// # Arguments
    ///
    /// * `grain`: Largest number of rows that is not split further. Values below 1 are read as 1.
    #[must_use]
    pub fn new(grain: usize) -> Self {
        Self { grain: grain.max(1) }
    }
}

impl RowRangeExecutor for DivideAndConquer {
    fn for_each_row<R, Op>(&self, first: usize, rows: &mut [R], operation: &Op)
    where
        R: Send,
        Op: Fn(usize, &mut R) + Sync,
    {
        if rows.len() <= self.grain {
            Sequential.for_each_row(first, rows, operation);
        } else {
            let middle = rows.len() / 2;
            let (left, right) = rows.split_at_mut(middle);
            join(
                || self.for_each_row(first, left, operation),
                || self.for_each_row(first + middle, right, operation),
            );
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::algorithm::parallel::{DivideAndConquer, RowRangeExecutor, Sequential};

    fn visits_every_row_once<E: RowRangeExecutor>(executor: E) {
        let mut rows = vec![0usize; 1000];
        let calls = AtomicUsize::new(0);

        executor.for_each_row(10, &mut rows[10..], &|i, row: &mut usize| {
            *row += i;
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(calls.load(Ordering::Relaxed), 990);
        assert!(rows[..10].iter().all(|&row| row == 0));
        assert!(rows.iter().enumerate().skip(10).all(|(i, &row)| row == i));
    }

    #[test]
    fn sequential() {
        visits_every_row_once(Sequential);
    }

    #[test]
    fn divide_and_conquer() {
        visits_every_row_once(DivideAndConquer::new(7));
        visits_every_row_once(DivideAndConquer::new(0));
        visits_every_row_once(DivideAndConquer::new(5000));
    }
}
