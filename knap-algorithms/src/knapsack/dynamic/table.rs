use crate::SolveError;

fn reserve<T: Clone>(
    what: &'static str,
    cells: u128,
    len: u128,
    fill: T,
) -> Result<Vec<T>, SolveError> {
    let failure = || SolveError::AllocationFailure { what, cells };
    let len = usize::try_from(len).map_err(|_| failure())?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| failure())?;
    buffer.resize(len, fill);
    Ok(buffer)
}

/// Best value per weight budget, `0..=capacity`.
#[derive(Debug, Clone)]
pub struct ValueTable {
    cells: Vec<f64>,
}

impl ValueTable {
    pub fn new(capacity: u32) -> Result<Self, SolveError> {
        let cells = capacity as u128 + 1;
        Ok(Self {
            cells: reserve("value table", cells, cells, 0.0)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn get(&self, weight: usize) -> f64 {
        self.cells[weight]
    }

    pub fn set(&mut self, weight: usize, value: f64) {
        self.cells[weight] = value;
    }
}

const WORD_BITS: u128 = u64::BITS as u128;

/// One bit per (item, weight) cell, set when that item improved the value
/// table at that weight.
#[derive(Debug, Clone)]
pub struct KeepTable {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl KeepTable {
    pub fn new(rows: usize, cols: usize) -> Result<Self, SolveError> {
        let cells = rows as u128 * cols as u128;
        // Bit indices are computed in usize
        if cells > usize::MAX as u128 {
            return Err(SolveError::AllocationFailure {
                what: "keep table",
                cells,
            });
        }
        let words = reserve("keep table", cells, cells.div_ceil(WORD_BITS), 0u64)?;
        Ok(Self { rows, cols, words })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> (usize, u64) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} keep table",
            row,
            col,
            self.rows,
            self.cols
        );
        let bit = row * self.cols + col;
        (bit / 64, 1u64 << (bit % 64))
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.index(row, col);
        self.words[word] & mask != 0
    }

    pub fn set(&mut self, row: usize, col: usize) {
        let (word, mask) = self.index(row, col);
        self.words[word] |= mask;
    }
}
