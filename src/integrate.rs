//! # Cumulative Trapezoidal Integration
//!
//! Computes the running integral of a sampled series. The Corrtest parser uses
//! it to derive the charge series `Q` from current `I`, either against the
//! recorded time axis or against a uniform step taken from the acquisition
//! frequency.
//!
//! ```
//! use corrbook::integrate::{integrate, Step};
//!
//! let q = integrate(&[1.0, 2.0, 1.0], Step::Abscissa(&[0.0, 1.0, 2.0])).unwrap();
//! assert_eq!(q, vec![0.0, 1.5, 3.0]);
//! ```

/// Errors raised by the integrator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrateError {
    /// Neither (or both) of step and abscissa were supplied
    #[error("Wrong arguments: {0}")]
    WrongArguments(String),

    /// Uniform step was zero, negative or NaN
    #[error("Step must be positive, got {0}")]
    NonPositiveStep(f64),

    /// Abscissa and ordinate lengths differ
    #[error("Length mismatch: x has {x_len} samples, y has {y_len} samples")]
    LengthMismatch {
        /// Abscissa length
        x_len: usize,
        /// Ordinate length
        y_len: usize,
    },
}

/// Spacing between consecutive samples
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Constant spacing `h`
    Uniform(f64),
    /// Explicit sample positions, one per ordinate
    Abscissa(&'a [f64]),
}

/// Cumulative trapezoidal integral of `y`.
///
/// `R[0] = 0` and `R[i] = R[i-1] + (y[i] + y[i-1]) * dx / 2`, where `dx` is
/// either the uniform step or `x[i] - x[i-1]`. The result always has the
/// same length as `y`.
pub fn integrate(y: &[f64], step: Step<'_>) -> Result<Vec<f64>, IntegrateError> {
    match step {
        Step::Uniform(h) => {
            // `!(h > 0.0)` also rejects NaN
            if !(h > 0.0) {
                return Err(IntegrateError::NonPositiveStep(h));
            }
            Ok(accumulate(y, |_| h))
        }
        Step::Abscissa(x) => {
            if x.len() != y.len() {
                return Err(IntegrateError::LengthMismatch {
                    x_len: x.len(),
                    y_len: y.len(),
                });
            }
            Ok(accumulate(y, |i| x[i] - x[i - 1]))
        }
    }
}

/// Optional-argument form of [`integrate`] for callers holding `h` and `x`
/// as options, e.g. values read from a config or a foreign interface.
///
/// Exactly one of `h` or `x` must be given; anything else is
/// [`IntegrateError::WrongArguments`]. The parser itself always knows which
/// spacing applies and calls [`integrate`] with a [`Step`] directly.
pub fn integrate_with(
    y: &[f64],
    h: Option<f64>,
    x: Option<&[f64]>,
) -> Result<Vec<f64>, IntegrateError> {
    match (h, x) {
        (Some(h), None) => integrate(y, Step::Uniform(h)),
        (None, Some(x)) => integrate(y, Step::Abscissa(x)),
        (None, None) => Err(IntegrateError::WrongArguments(
            "either a step h or an abscissa x is required".to_string(),
        )),
        (Some(_), Some(_)) => Err(IntegrateError::WrongArguments(
            "step h and abscissa x are mutually exclusive".to_string(),
        )),
    }
}

fn accumulate(y: &[f64], dx: impl Fn(usize) -> f64) -> Vec<f64> {
    let mut result = vec![0.0; y.len()];
    for i in 1..y.len() {
        result[i] = result[i - 1] + (y[i] + y[i - 1]) * dx(i) / 2.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_step() {
        let r = integrate(&[1.0, 2.0, 1.0], Step::Uniform(1.0)).unwrap();
        assert_eq!(r, vec![0.0, 1.5, 3.0]);
    }

    #[test]
    fn test_abscissa_uneven_spacing() {
        let r = integrate(&[2.0, 2.0, 2.0], Step::Abscissa(&[0.0, 1.0, 4.0])).unwrap();
        assert_eq!(r, vec![0.0, 2.0, 8.0]);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(integrate(&[], Step::Uniform(0.1)).unwrap(), Vec::<f64>::new());
        assert_eq!(integrate(&[5.0], Step::Uniform(0.1)).unwrap(), vec![0.0]);
        assert_eq!(integrate(&[5.0], Step::Abscissa(&[3.0])).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_constant_series() {
        let r = integrate(&[4.0; 6], Step::Uniform(0.5)).unwrap();
        for (i, v) in r.iter().enumerate() {
            assert_eq!(*v, 4.0 * 0.5 * i as f64);
        }
    }

    #[test]
    fn test_rejects_bad_step() {
        assert_eq!(
            integrate(&[1.0, 2.0], Step::Uniform(0.0)),
            Err(IntegrateError::NonPositiveStep(0.0))
        );
        assert!(matches!(
            integrate(&[1.0, 2.0], Step::Uniform(-1.0)),
            Err(IntegrateError::NonPositiveStep(_))
        ));
        assert!(integrate(&[1.0, 2.0], Step::Uniform(f64::NAN)).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = integrate(&[1.0, 2.0, 3.0], Step::Abscissa(&[0.0, 1.0])).unwrap_err();
        assert_eq!(err, IntegrateError::LengthMismatch { x_len: 2, y_len: 3 });
    }

    #[test]
    fn test_integrate_with_argument_checks() {
        assert!(matches!(
            integrate_with(&[1.0, 2.0], None, None),
            Err(IntegrateError::WrongArguments(_))
        ));
        assert!(matches!(
            integrate_with(&[1.0, 2.0], Some(1.0), Some(&[0.0, 1.0])),
            Err(IntegrateError::WrongArguments(_))
        ));
        assert_eq!(
            integrate_with(&[1.0, 3.0], Some(2.0), None).unwrap(),
            vec![0.0, 4.0]
        );
        assert_eq!(
            integrate_with(&[1.0, 3.0], None, Some(&[1.0, 2.0])).unwrap(),
            vec![0.0, 2.0]
        );
    }
}
