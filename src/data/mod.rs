/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  dataset.csv        model.csv
///  (km, price)         (a, b)
///        │               │
///        ▼               ▼
///   ┌─────────────────────────┐
///   │         loader          │  parse → Dataset, LinearModel
///   └─────────────────────────┘
///        │               │
///        ▼               ▼
///   ┌─────────┐    ┌─────────────┐
///   │ Dataset │───►│ LinearModel │  derived_series: y = a·km + b
///   └─────────┘    └─────────────┘
/// ```

pub mod loader;
pub mod model;
