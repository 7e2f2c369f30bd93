use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Read-only view of the chart's domain/pixel mapping.
///
/// `invert` maps a surface-relative pixel x back into the domain and
/// `project` maps a sample onto the surface.
pub trait CoordinateScale {
    fn invert(&self, pixel_x: f64) -> ChartResult<f64>;
    fn project(&self, point: DataPoint) -> ChartResult<PixelPoint>;
}

impl<T: CoordinateScale + ?Sized> CoordinateScale for &T {
    fn invert(&self, pixel_x: f64) -> ChartResult<f64> {
        (**self).invert(pixel_x)
    }

    fn project(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        (**self).project(point)
    }
}

impl<T: CoordinateScale + ?Sized> CoordinateScale for Rc<T> {
    fn invert(&self, pixel_x: f64) -> ChartResult<f64> {
        (**self).invert(pixel_x)
    }

    fn project(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        (**self).project(point)
    }
}

/// Default two-axis scale: time grows to the right, value grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartScale")]
pub struct ChartScale {
    time: LinearScale,
    value: LinearScale,
    viewport: Viewport,
}

#[derive(Deserialize)]
struct RawChartScale {
    time: LinearScale,
    value: LinearScale,
    viewport: Viewport,
}

impl TryFrom<RawChartScale> for ChartScale {
    type Error = ChartError;

    fn try_from(raw: RawChartScale) -> ChartResult<Self> {
        Ok(Self {
            time: raw.time,
            value: raw.value,
            viewport: validate_viewport(raw.viewport)?,
        })
    }
}

impl ChartScale {
    pub fn new(
        viewport: Viewport,
        time_range: (f64, f64),
        value_range: (f64, f64),
    ) -> ChartResult<Self> {
        let viewport = validate_viewport(viewport)?;
        Ok(Self {
            time: LinearScale::new(time_range.0, time_range.1)?,
            value: LinearScale::new(value_range.0, value_range.1)?,
            viewport,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn time_range(self) -> (f64, f64) {
        self.time.domain()
    }

    #[must_use]
    pub fn value_range(self) -> (f64, f64) {
        self.value.domain()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = validate_viewport(viewport)?;
        Ok(())
    }

    pub fn set_time_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.time = LinearScale::new(start, end)?;
        Ok(())
    }

    pub fn set_value_range(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.value = LinearScale::new(min, max)?;
        Ok(())
    }

    /// Fits the time axis to the min/max `x` across the given samples.
    pub fn fit_time_to_data<'a>(
        &mut self,
        points: impl IntoIterator<Item = &'a DataPoint>,
    ) -> ChartResult<()> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            min = min.min(point.x);
            max = max.max(point.x);
        }

        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "time range cannot be fitted to empty data".to_owned(),
            ));
        }
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        self.set_time_range(min, max)
    }
}

impl CoordinateScale for ChartScale {
    fn invert(&self, pixel_x: f64) -> ChartResult<f64> {
        self.time
            .pixel_to_domain(pixel_x, f64::from(self.viewport.width))
    }

    fn project(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        let height = f64::from(self.viewport.height);
        let x = self
            .time
            .domain_to_pixel(point.x, f64::from(self.viewport.width))?;
        let y = height - self.value.domain_to_pixel(point.y, height)?;
        Ok(PixelPoint::new(x, y))
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}
