/// Data layer: table and core-set loading, label cleaning, filtering.
///
/// Architecture:
/// ```text
///  table.txt            core_a.txt  core_b.txt
///      │                      │         │
///      ▼                      ▼         ▼
///   ┌──────────┐        ┌───────────────────┐
///   │  loader   │        │ loader + taxonomy  │  clean, truncate, dedupe
///   └──────────┘        └───────────────────┘
///      │ AbundanceTable          │ CoreSet
///      ▼                         ▼
///   ┌─────────────────────────────────┐
///   │  filter   zero → core → % → sort │
///   └─────────────────────────────────┘
///      │
///      ▼
///   AbundanceTable (rows to plot)
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod taxonomy;
