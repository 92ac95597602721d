/// Data layer: element types, loading, and lookup.
///
/// Architecture:
/// ```text
///  periodic_table.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → units, strip footnotes → ElementTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ElementTable  │  (symbol, name) → ElementRecord
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  lookup   │  symbol / name query → ElementRecord
///   └──────────┘
/// ```

pub mod loader;
pub mod lookup;
pub mod model;
