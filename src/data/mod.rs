/// Data layer: core types, loading, and quantile binning.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse fixed layout → BlockDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ BlockDataset  │  Vec<BlockRecord>, block index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  binner   │  quantile-cut the value column → bin edges
///   └──────────┘
/// ```

pub mod binner;
pub mod loader;
pub mod model;
