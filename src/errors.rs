use std::fmt;

/// Everything that can go wrong between a scene description and an SVG.
///
/// The generators themselves can't fail; these come from validating
/// user-supplied parameters or from the output layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    NegativeDepth(i64),
    DepthTooLarge { depth: i64, max: u32 },
    NegativeIterations(i64),
    InvalidAnchor(usize),
    NonFiniteParameter(&'static str),
    EmptyGeometry,
    Config(String),
}

impl std::error::Error for FractalError {}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractalError::NegativeDepth(depth) => {
                write!(f, "Recursion depth must be non-negative, got {}", depth)
            }
            FractalError::DepthTooLarge { depth, max } => {
                write!(f, "Recursion depth {} is past the limit of {}", depth, max)
            }
            FractalError::NegativeIterations(count) => {
                write!(f, "Iteration count must be non-negative, got {}", count)
            }
            FractalError::InvalidAnchor(index) => {
                write!(f, "Seed anchor index {} is not one of 0, 1, 2", index)
            }
            FractalError::NonFiniteParameter(name) => {
                write!(f, "Parameter '{}' must be a finite number", name)
            }
            FractalError::EmptyGeometry => write!(f, "Empty/Invalid/Dimensionless geometry"),
            FractalError::Config(msg) => write!(f, "Scene configuration error: {}", msg),
        }
    }
}

/// Checks a signed depth from the outside world against `0..=max` and hands
/// back the unsigned value the generators take.
pub fn checked_depth(depth: i64, max: u32) -> Result<u32, FractalError> {
    if depth < 0 {
        return Err(FractalError::NegativeDepth(depth));
    }
    match u32::try_from(depth) {
        Ok(depth) if depth <= max => Ok(depth),
        _ => Err(FractalError::DepthTooLarge { depth, max }),
    }
}

/// Same as [`checked_depth`], for chaos-game iteration counts.
pub fn checked_iterations(iterations: i64) -> Result<usize, FractalError> {
    usize::try_from(iterations).map_err(|_| FractalError::NegativeIterations(iterations))
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, FractalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FractalError::NonFiniteParameter(name))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_checked_depth() {
        assert_eq!(checked_depth(0, 10), Ok(0));
        assert_eq!(checked_depth(6, 10), Ok(6));
        assert_eq!(checked_depth(10, 10), Ok(10));
        assert_eq!(checked_depth(-1, 10), Err(FractalError::NegativeDepth(-1)));
        assert_eq!(
            checked_depth(11, 10),
            Err(FractalError::DepthTooLarge { depth: 11, max: 10 })
        );
        assert_eq!(
            checked_depth(i64::MAX, 10),
            Err(FractalError::DepthTooLarge { depth: i64::MAX, max: 10 })
        );
    }

    #[test]
    fn test_checked_iterations() {
        assert_eq!(checked_iterations(2500), Ok(2500));
        assert_eq!(
            checked_iterations(-3),
            Err(FractalError::NegativeIterations(-3))
        );
    }

    #[test]
    fn test_finite() {
        assert!(finite("side", 10.0).is_ok());
        assert_eq!(
            finite("side", f64::NAN),
            Err(FractalError::NonFiniteParameter("side"))
        );
    }

    #[test]
    fn test_display() {
        let msg = format!("{}", FractalError::InvalidAnchor(7));
        assert!(msg.contains('7'));
    }
}
