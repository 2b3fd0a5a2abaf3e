//! Pooled Sample Statistics

/// Summary statistics over a pooled sample list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (ddof = 0)
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Sum of all samples
    pub sum: f64,
}

impl Statistics {
    /// Compute statistics from a slice of values.
    ///
    /// An empty slice yields all zeros.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // A constant pool has exactly zero spread; summing then dividing
        // would otherwise leave rounding residue in both mean and std.
        if min == max {
            return Self {
                count: values.len(),
                mean: min,
                std_dev: 0.0,
                min,
                max,
                sum,
            };
        }

        let mean = sum / n;
        let m2: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
        let std_dev = (m2 / n).sqrt();

        Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            max,
            sum,
        }
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Coefficient of variation, 0 unless the mean is positive
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
