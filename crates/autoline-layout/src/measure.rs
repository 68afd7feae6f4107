// crates/autoline-layout/src/measure.rs
//! Measurement pass: decides which row every box lands on and how tall each
//! row is. Nothing is positioned here; see [`crate::place`].

use crate::{BoxMeasurer, LayoutConfig, MeasureSpec};
use autoline_core::BoxSpec;
use glam::IVec2;
use tracing::{debug, trace};

/// Row index of every box, in box order.
///
/// Indices never decrease and consecutive boxes differ by at most one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    rows: Vec<usize>,
}

impl RowAssignment {
    fn with_capacity(capacity: usize) -> Self {
        Self { rows: Vec::with_capacity(capacity) }
    }

    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.get(index).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows used; zero for an empty sequence.
    pub fn row_count(&self) -> usize {
        self.rows.last().map_or(0, |last| last + 1)
    }
}

/// Height and top offset of every row, indexed by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMetrics {
    heights: Vec<i32>,
    tops: Vec<i32>,
}

impl RowMetrics {
    /// Open a new row below the last one and return its index.
    fn push_row(&mut self, height: i32) -> usize {
        let top = match (self.tops.last(), self.heights.last()) {
            (Some(top), Some(height)) => top.saturating_add(*height),
            _ => 0,
        };
        self.tops.push(top);
        self.heights.push(height);
        self.heights.len() - 1
    }

    fn grow(&mut self, row: usize, height: i32) {
        let current = &mut self.heights[row];
        *current = (*current).max(height);
    }

    pub fn height(&self, row: usize) -> Option<i32> {
        self.heights.get(row).copied()
    }

    pub fn top(&self, row: usize) -> Option<i32> {
        self.tops.get(row).copied()
    }

    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    pub fn tops(&self) -> &[i32] {
        &self.tops
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// Everything the placement pass needs from the measurement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    assignment: RowAssignment,
    metrics: RowMetrics,
    measured: Vec<IVec2>,
    content_height: i32,
}

impl Measurement {
    pub fn assignment(&self) -> &RowAssignment {
        &self.assignment
    }

    pub fn metrics(&self) -> &RowMetrics {
        &self.metrics
    }

    /// Sizes reported by the measurer, margins excluded.
    pub fn measured_sizes(&self) -> &[IVec2] {
        &self.measured
    }

    /// Height of all rows together, padding excluded.
    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }
}

pub(crate) fn width_constraint(spec: &BoxSpec, available_width: i32) -> MeasureSpec {
    match spec.requested_width.exact_px() {
        Some(width) => MeasureSpec::exact(width.min(available_width)),
        None => MeasureSpec::at_most(available_width),
    }
}

pub(crate) fn height_constraint(spec: &BoxSpec, row_height: Option<i32>) -> MeasureSpec {
    match (row_height, spec.requested_height.exact_px()) {
        (Some(row_height), Some(height)) => MeasureSpec::exact(row_height.min(height)),
        (Some(row_height), None) => MeasureSpec::at_most(row_height),
        (None, Some(height)) => MeasureSpec::exact(height),
        (None, None) => MeasureSpec::unspecified(),
    }
}

/// Measure every box and greedily assign it to a row.
///
/// A box stays on the current row while its width plus horizontal margins
/// fits in what is left of the row; otherwise it opens the next row. The
/// first box always opens row 0, even when it alone overflows. After an
/// overflowing box the remaining width goes negative, so the next box always
/// wraps, zero-width boxes included. Errors from
/// `measurer` are returned as-is and abort the pass.
pub fn measure<M>(
    boxes: &[BoxSpec],
    config: &LayoutConfig,
    measurer: &mut M,
) -> Result<Measurement, M::Error>
where
    M: BoxMeasurer + ?Sized,
{
    let available_width = config.available_width.max(0);
    let opening_height = config.row_height.unwrap_or(0);

    let mut assignment = RowAssignment::with_capacity(boxes.len());
    let mut metrics = RowMetrics::default();
    let mut measured = Vec::with_capacity(boxes.len());
    let mut remaining = available_width;

    for (index, spec) in boxes.iter().enumerate() {
        let width_spec = width_constraint(spec, available_width);
        let height_spec = height_constraint(spec, config.row_height);
        let size = measurer.measure_box(spec, width_spec, height_spec)?;
        let occupied = size.x.saturating_add(spec.margin.horizontal());

        let row = if metrics.is_empty() {
            remaining = available_width.saturating_sub(occupied);
            metrics.push_row(opening_height)
        } else if occupied <= remaining {
            remaining = remaining.saturating_sub(occupied);
            metrics.len() - 1
        } else {
            remaining = available_width.saturating_sub(occupied);
            let row = metrics.push_row(opening_height);
            trace!("Box {} '{}' wraps to row {} (needs {}px)", index, spec.id, row, occupied);
            row
        };

        if config.row_height.is_none() {
            metrics.grow(row, size.y.saturating_add(spec.margin.vertical()));
        }

        trace!(
            "Measured box {} '{}': width={}, height={} -> {}x{} on row {}, {}px left",
            index, spec.id, width_spec, height_spec, size.x, size.y, row, remaining
        );

        assignment.rows.push(row);
        measured.push(size);
    }

    let content_height = match config.row_height {
        Some(row_height) => row_height.saturating_mul(metrics.len() as i32),
        None => match (metrics.tops.last(), metrics.heights.last()) {
            (Some(top), Some(height)) => top.saturating_add(*height),
            _ => 0,
        },
    };

    debug!(
        "Flow measure: {} boxes in {} rows, available_width={}, content_height={}",
        boxes.len(),
        metrics.len(),
        available_width,
        content_height
    );

    Ok(Measurement {
        assignment,
        metrics,
        measured,
        content_height,
    })
}
