use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// BlockRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A single measurement: one layer of one block.
///
/// Produced by splitting the composite identifier column `"<block>_<layer>"`;
/// `block` is 1-based, `layer` is 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Block index (1-based), positions the bar on the 2D grid.
    pub block: u32,
    /// Layer index (0-based), maps to the bar's z position.
    pub layer: u32,
    /// The measured value, drives the bar color.
    pub value: f64,
}

impl BlockRecord {
    /// Reconstruct the composite identifier this record was parsed from.
    pub fn composite_key(&self) -> String {
        format!("{}_{}", self.block, self.layer)
    }
}

// ---------------------------------------------------------------------------
// BlockDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed block and layer indices.
///
/// Immutable after construction: loaded once, consumed by both rendering
/// passes, discarded at process exit.
#[derive(Debug, Clone)]
pub struct BlockDataset {
    /// All records in input order.
    pub records: Vec<BlockRecord>,
    /// Distinct block numbers, ascending.
    pub unique_blocks: Vec<u32>,
    /// Highest layer index present in any block.
    pub max_layer: u32,
}

impl BlockDataset {
    /// Build the block index from the loaded records.
    pub fn from_records(records: Vec<BlockRecord>) -> Self {
        let blocks: BTreeSet<u32> = records.iter().map(|r| r.block).collect();
        let max_layer = records.iter().map(|r| r.layer).max().unwrap_or(0);
        BlockDataset {
            records,
            unique_blocks: blocks.into_iter().collect(),
            max_layer,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct blocks.
    pub fn block_count(&self) -> usize {
        self.unique_blocks.len()
    }

    /// The value column, in record order.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(block: u32, layer: u32, value: f64) -> BlockRecord {
        BlockRecord { block, layer, value }
    }

    #[test]
    fn composite_key_round_trips() {
        let r = rec(12, 3, 1.5);
        assert_eq!(r.composite_key(), "12_3");
    }

    #[test]
    fn block_index_is_sorted_and_distinct() {
        let ds = BlockDataset::from_records(vec![
            rec(7, 0, 1.0),
            rec(2, 1, 2.0),
            rec(7, 1, 3.0),
            rec(2, 0, 4.0),
        ]);
        assert_eq!(ds.unique_blocks, vec![2, 7]);
        assert_eq!(ds.block_count(), 2);
        assert_eq!(ds.max_layer, 1);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn values_preserve_record_order() {
        let ds = BlockDataset::from_records(vec![rec(1, 0, 5.0), rec(1, 1, -2.0)]);
        assert_eq!(ds.values(), vec![5.0, -2.0]);
    }
}
