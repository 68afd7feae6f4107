// crates/autoline-layout/src/measurer.rs

use crate::{MeasureMode, MeasureSpec};
use autoline_core::{BoxSpec, Dimension};
use glam::IVec2;
use std::convert::Infallible;

/// Resolves a box's actual size under the constraints chosen by the flow
/// engine. This is where a host plugs in text shaping, image sizes and so on.
///
/// Any `FnMut(&BoxSpec, MeasureSpec, MeasureSpec) -> Result<IVec2, E>` closure
/// is a measurer. Errors are handed back to the caller of the layout untouched.
pub trait BoxMeasurer {
    type Error;

    fn measure_box(
        &mut self,
        spec: &BoxSpec,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<IVec2, Self::Error>;
}

impl<F, E> BoxMeasurer for F
where
    F: FnMut(&BoxSpec, MeasureSpec, MeasureSpec) -> Result<IVec2, E>,
{
    type Error = E;

    fn measure_box(
        &mut self,
        spec: &BoxSpec,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<IVec2, E> {
        (self)(spec, width, height)
    }
}

/// Sizes boxes from their intrinsic `content` size.
///
/// `Fill` requests take everything an `AtMost` constraint offers; other
/// requests shrink to content within it.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicMeasurer;

impl IntrinsicMeasurer {
    fn resolve(request: Dimension, content: i32, spec: MeasureSpec) -> i32 {
        match spec.mode {
            MeasureMode::AtMost if request.is_fill() => spec.size,
            _ => spec.constrain(content),
        }
    }
}

impl BoxMeasurer for IntrinsicMeasurer {
    type Error = Infallible;

    fn measure_box(
        &mut self,
        spec: &BoxSpec,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<IVec2, Infallible> {
        Ok(IVec2::new(
            Self::resolve(spec.requested_width, spec.content.x, width),
            Self::resolve(spec.requested_height, spec.content.y, height),
        ))
    }
}
