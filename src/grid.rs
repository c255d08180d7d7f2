// ---------------------------------------------------------------------------
// Grid mapper: block number → (row, col)
// ---------------------------------------------------------------------------

/// Near-square layout of block numbers, filled row-major in ascending order.
///
/// Absent block numbers simply leave their cells empty; there is no
/// gap-filling or reflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    side_length: usize,
}

/// One cell of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridLayout {
    /// Smallest square that fits `count` distinct blocks.
    pub fn for_block_count(count: usize) -> Self {
        GridLayout {
            side_length: (count as f64).sqrt().ceil() as usize,
        }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Map a 1-based block number to its cell: `divmod(block - 1, side)`.
    pub fn cell(&self, block: u32) -> GridCell {
        let side = self.side_length.max(1);
        let idx = (block.max(1) - 1) as usize;
        GridCell {
            row: idx / side,
            col: idx % side,
        }
    }

    /// Invariant guard: holds for every cell `cell()` derives from a block
    /// number within the layout's count.  The renderer checks it anyway and
    /// silently skips records that fail, keeping the behavior auditable.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.side_length && cell.col < self.side_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_length_squares_cover_the_block_count() {
        for count in 1..=60 {
            let grid = GridLayout::for_block_count(count);
            let side = grid.side_length();
            assert!(side * side >= count, "side {side} too small for {count}");
            // Smallest such square.
            assert!((side - 1) * (side - 1) < count);
        }
    }

    #[test]
    fn blocks_fill_row_major() {
        let grid = GridLayout::for_block_count(4);
        assert_eq!(grid.side_length(), 2);
        assert_eq!(grid.cell(1), GridCell { row: 0, col: 0 });
        assert_eq!(grid.cell(2), GridCell { row: 0, col: 1 });
        assert_eq!(grid.cell(3), GridCell { row: 1, col: 0 });
        assert_eq!(grid.cell(4), GridCell { row: 1, col: 1 });
    }

    #[test]
    fn derived_cells_always_satisfy_the_bounds_guard() {
        for count in 1..=30 {
            let grid = GridLayout::for_block_count(count);
            for block in 1..=count as u32 {
                assert!(grid.contains(grid.cell(block)));
            }
        }
    }

    #[test]
    fn out_of_layout_blocks_fail_the_guard() {
        // Block numbers past the layout's capacity land outside the square.
        let grid = GridLayout::for_block_count(2);
        assert!(!grid.contains(grid.cell(5)));
    }
}
