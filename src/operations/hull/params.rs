use crate::error::{GeometryError, Result};

/// Parameters controlling concave refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullParams {
    /// Cosine threshold for accepting a dent, in `[-1, 1]`.
    ///
    /// `-1` never accepts a dent (the result stays convex); values close to
    /// `1` accept almost any candidate and carve aggressively.
    pub concavity: f64,
    /// Side length of the grid cells used by the local candidate search.
    pub scale_factor: f64,
    /// Optional cap on the number of dents applied in one computation.
    ///
    /// Refinement stops early once the cap is reached; the boundary is
    /// still a simple polygon, just less concave.
    pub max_divisions: Option<usize>,
}

impl Default for HullParams {
    fn default() -> Self {
        Self {
            concavity: 0.0,
            scale_factor: 1.0,
            max_divisions: None,
        }
    }
}

impl HullParams {
    /// Creates unbounded parameters with the given concavity and scale factor.
    #[must_use]
    pub fn new(concavity: f64, scale_factor: f64) -> Self {
        Self {
            concavity,
            scale_factor,
            max_divisions: None,
        }
    }

    /// Sets a division budget.
    #[must_use]
    pub fn with_max_divisions(mut self, max_divisions: usize) -> Self {
        self.max_divisions = Some(max_divisions);
        self
    }

    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if `concavity` is not in `[-1, 1]`
    /// - `GeometryError::NonPositive` if `scale_factor` is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.concavity) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "concavity",
                value: self.concavity,
                min: -1.0,
                max: 1.0,
            }
            .into());
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(GeometryError::NonPositive {
                parameter: "scale_factor",
                value: self.scale_factor,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HullError;

    #[test]
    fn defaults_are_valid() {
        assert!(HullParams::default().validate().is_ok());
        assert!(HullParams::new(-1.0, 0.5).validate().is_ok());
        assert!(HullParams::new(1.0, 100.0).validate().is_ok());
    }

    #[test]
    fn concavity_out_of_range() {
        for concavity in [1.5, -1.01, f64::NAN, f64::INFINITY] {
            let err = HullParams::new(concavity, 1.0).validate().unwrap_err();
            assert!(matches!(
                err,
                HullError::Geometry(GeometryError::ParameterOutOfRange {
                    parameter: "concavity",
                    ..
                })
            ));
        }
    }

    #[test]
    fn scale_factor_must_be_positive() {
        for scale_factor in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = HullParams::new(0.5, scale_factor).validate().unwrap_err();
            assert!(matches!(
                err,
                HullError::Geometry(GeometryError::NonPositive { .. })
            ));
        }
    }

    #[test]
    fn budget_builder() {
        let params = HullParams::new(0.2, 4.0).with_max_divisions(3);
        assert_eq!(params.max_divisions, Some(3));
    }
}
