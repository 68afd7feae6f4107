// crates/autoline-layout/src/lib.rs

use autoline_core::BoxSpec;
use tracing::{debug, trace};

pub mod config;
pub mod constraints;
pub mod measure;
pub mod measurer;
pub mod place;

pub use config::*;
pub use constraints::*;
pub use measure::{measure, Measurement, RowAssignment, RowMetrics};
pub use measurer::*;
pub use place::*;

/// Output of a full measure + place cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLayout {
    pub measurement: Measurement,
    pub placement: PlacementResult,
}

impl FlowLayout {
    /// Row index of the box at `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.measurement.assignment().row_of(index)
    }
}

/// Lays boxes out left to right, wrapping into a new row whenever the next
/// box no longer fits in the current one.
#[derive(Debug, Default)]
pub struct FlowLayoutEngine {
    debug: bool,
}

impl FlowLayoutEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Run both passes over `boxes`. The measurer's error is the only way
    /// this can fail.
    pub fn compute_layout<M>(
        &self,
        boxes: &[BoxSpec],
        config: &LayoutConfig,
        measurer: &mut M,
    ) -> Result<FlowLayout, M::Error>
    where
        M: BoxMeasurer + ?Sized,
    {
        let measurement = measure(boxes, config, measurer)?;
        let placement = place(boxes, &measurement, config);

        for ((spec, rect), row) in boxes
            .iter()
            .zip(&placement.rects)
            .zip(measurement.assignment().as_slice())
        {
            if self.debug {
                debug!("Layout box '{}' row={} rect={:?}", spec.id, row, rect);
            } else {
                trace!("Layout box '{}' row={} rect={:?}", spec.id, row, rect);
            }
        }

        Ok(FlowLayout {
            measurement,
            placement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_engine_runs_both_passes() {
        let boxes = vec![BoxSpec::exact("a", 100, 10), BoxSpec::exact("b", 100, 10)];
        let layout = FlowLayoutEngine::new()
            .with_debug(true)
            .compute_layout(&boxes, &LayoutConfig::new(150), &mut IntrinsicMeasurer)
            .unwrap();

        assert_eq!(layout.row_of(0), Some(0));
        assert_eq!(layout.row_of(1), Some(1));
        assert_eq!(layout.row_of(2), None);
        assert_eq!(layout.placement.size, IVec2::new(150, 20));
    }

    #[test]
    fn test_engine_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlowLayoutEngine>();
        assert_send_sync::<FlowLayout>();
        assert_send_sync::<LayoutConfig>();
    }
}
