use crate::error::EstimatorError;
use crate::types::MIN_BATCHES_FOR_STD_DEV;

fn require_estimates(values: &[f64], required: usize) -> Result<(), EstimatorError> {
    if values.len() < required {
        return Err(EstimatorError::InsufficientEstimates {
            usable: values.len(),
            required,
        });
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, EstimatorError> {
    require_estimates(values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with an n - 1 divisor.
pub fn sample_std_dev(values: &[f64]) -> Result<f64, EstimatorError> {
    require_estimates(values, MIN_BATCHES_FOR_STD_DEV)?;
    let average = mean(values)?;
    let sum_squares: f64 = values.iter().map(|v| (v - average) * (v - average)).sum();
    Ok((sum_squares / (values.len() - 1) as f64).sqrt())
}

/// Standard error of the mean: stddev / sqrt(n).
pub fn standard_error(values: &[f64]) -> Result<f64, EstimatorError> {
    let n = values.len() as f64;
    Ok(sample_std_dev(values)? / n.sqrt())
}

/// Historical formula: divides by sqrt(n) twice.
///
/// Underestimates the standard error by a factor of sqrt(n).
pub fn legacy_standard_error(values: &[f64]) -> Result<f64, EstimatorError> {
    let n = values.len() as f64;
    Ok(standard_error(values)? / n.sqrt())
}
