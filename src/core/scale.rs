use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping between a domain interval and a pixel extent starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinearScale")]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

#[derive(Deserialize)]
struct RawLinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl TryFrom<RawLinearScale> for LinearScale {
    type Error = ChartError;

    fn try_from(raw: RawLinearScale) -> ChartResult<Self> {
        Self::new(raw.domain_start, raw.domain_end)
    }
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent_px;
        Ok(self.domain_start + normalized * span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_scale_rejects_empty_domain() {
        let result =
            serde_json::from_str::<LinearScale>(r#"{"domain_start": 5.0, "domain_end": 5.0}"#);
        assert!(result.is_err());

        let scale =
            serde_json::from_str::<LinearScale>(r#"{"domain_start": 0.0, "domain_end": 8.0}"#)
                .expect("valid scale");
        assert_eq!(scale.domain(), (0.0, 8.0));
    }
}
