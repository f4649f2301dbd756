use std::fmt;

// ---------------------------------------------------------------------------
// Dataset – the observed (km, price) pairs
// ---------------------------------------------------------------------------

/// Observed mileage/price pairs in file order.
///
/// Stored column-wise; `km` and `price` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    km: Vec<f64>,
    price: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, km: f64, price: f64) {
        self.km.push(km);
        self.price.push(price);
    }

    pub fn km(&self) -> &[f64] {
        &self.km
    }

    pub fn price(&self) -> &[f64] {
        &self.price
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.km.is_empty()
    }

    /// `[km, price]` pairs, ready for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.km.iter().zip(self.price()).map(|(&km, &price)| [km, price])
    }
}

impl FromIterator<(f64, f64)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (km, price) in iter {
            dataset.push(km, price);
        }
        dataset
    }
}

// ---------------------------------------------------------------------------
// LinearModel – fitted coefficients
// ---------------------------------------------------------------------------

/// `price ≈ a * km + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    /// Slope.
    pub a: f64,
    /// Intercept.
    pub b: f64,
}

impl LinearModel {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn estimate(&self, km: f64) -> f64 {
        self.a * km + self.b
    }

    /// The regression line evaluated at every `km` of the dataset, in order.
    pub fn derived_series(&self, dataset: &Dataset) -> Vec<f64> {
        dataset.km().iter().map(|&km| self.estimate(km)).collect()
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.b < 0.0 {
            write!(f, "price = {}·km − {}", self.a, -self.b)
        } else {
            write!(f, "price = {}·km + {}", self.a, self.b)
        }
    }
}
