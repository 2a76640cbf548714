pub mod radial;
pub mod types;

pub use radial::{
    AXIS_COUNT, GRID_RING_COUNT, LABEL_RADIUS_FACTOR, RADIUS_RATIO, RadialLayout,
    VALUE_LABEL_CLEARANCE, VALUE_LABEL_OFFSET, axis_angle, normalized_value,
};
pub use types::{Point, Rect, Viewport};
