use num_traits::ToPrimitive;

use super::error::RenderError;

pub fn f32_to_u32(num: f32) -> Result<u32, RenderError> {
    num.to_u32().ok_or(RenderError::CoordinateOutOfRange(num))
}

pub fn f32_to_i32(num: f32) -> Result<i32, RenderError> {
    num.to_i32().ok_or(RenderError::CoordinateOutOfRange(num))
}
