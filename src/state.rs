use crate::data::model::{Dataset, LinearModel};

// ---------------------------------------------------------------------------
// Plot state
// ---------------------------------------------------------------------------

/// Everything the window draws, computed once before it opens.
#[derive(Debug, Clone)]
pub struct PlotState {
    /// Observed `[km, price]` points.
    pub scatter: Vec<[f64; 2]>,

    /// `[km, a·km + b]` for every observed km, in dataset order.
    pub fitted: Vec<[f64; 2]>,

    pub model: LinearModel,
}

impl PlotState {
    pub fn new(dataset: &Dataset, model: LinearModel) -> Self {
        let fitted = dataset
            .km()
            .iter()
            .zip(model.derived_series(dataset))
            .map(|(&km, y)| [km, y])
            .collect();

        Self {
            scatter: dataset.points().collect(),
            fitted,
            model,
        }
    }

    /// Number of observed points.
    pub fn len(&self) -> usize {
        self.scatter.len()
    }
}
