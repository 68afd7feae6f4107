// crates/autoline-layout/src/place.rs

use crate::{LayoutConfig, Measurement};
use autoline_core::{BoxSpec, Rect};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Final geometry of a flow container and its boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Container size, padding included.
    pub size: IVec2,
    /// One rectangle per box, in box order, in container coordinates.
    pub rects: Vec<Rect>,
}

/// Position every measured box.
///
/// `boxes` must be the sequence that produced `measurement`; any boxes past
/// the measured ones are ignored.
pub fn place(boxes: &[BoxSpec], measurement: &Measurement, config: &LayoutConfig) -> PlacementResult {
    let metrics = measurement.metrics();
    let padding = config.padding;
    let mut rects: Vec<Rect> = Vec::with_capacity(measurement.len());
    // (row, right edge plus right margin) of the previous box
    let mut previous: Option<(usize, i32)> = None;

    let measured = boxes
        .iter()
        .zip(measurement.assignment().as_slice())
        .zip(measurement.measured_sizes());

    for ((spec, &row), &size) in measured {
        let row_height = config.row_height.unwrap_or(metrics.heights()[row]);
        let row_top = metrics.tops()[row];

        let vertical_offset = if config.center_vertical_in_row {
            row_height.saturating_sub(size.y) / 2
        } else {
            spec.margin.top
        };

        let left = match previous {
            Some((previous_row, previous_edge)) if previous_row == row => {
                previous_edge.saturating_add(spec.margin.left)
            }
            _ => padding.left.saturating_add(spec.margin.left),
        };
        let top = padding.top.saturating_add(row_top).saturating_add(vertical_offset);

        let rect = Rect::from_origin_size(IVec2::new(left, top), size);
        previous = Some((row, rect.right.saturating_add(spec.margin.right)));
        rects.push(rect);
    }

    let width = if rects.is_empty() {
        padding.horizontal()
    } else {
        config.container_width()
    };
    let size = IVec2::new(
        width,
        measurement.content_height().saturating_add(padding.vertical()),
    );

    debug!("Flow place: {} rects, container {}x{}", rects.len(), size.x, size.y);

    PlacementResult { size, rects }
}
