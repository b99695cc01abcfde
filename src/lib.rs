//! colorwheel - an HSV color-wheel engine
//!
//! A circular hue ring around an inscribed saturation/value square, reduced to
//! the parts that are hard to get right: the conversions between RGB, HSL,
//! HSV and hex, and the geometry that maps pointer positions to ring angles
//! and square coordinates (and back, for indicators and gradients).
//!
//! The crate is adapter-agnostic: the embedding GUI layer feeds it
//! widget-local [`PointerEvent`]s and paints from the sample/stop data the
//! wheel produces. No platform types cross the boundary.
//!
//! ```
//! use colorwheel::{ColorWheel, Point, PointerEvent};
//!
//! let mut wheel = ColorWheel::new(200.0);
//! wheel.set_color_hex("#3399ff").unwrap();
//!
//! // A press in the ring band starts a hue drag.
//! wheel.handle_event(&PointerEvent::Pressed {
//!     position: Point::new(100.0, 5.0),
//! });
//! assert!(wheel.is_dragging());
//! ```

mod color;
mod error;
mod event;
mod geometry;
mod gradient;
mod wheel;

pub use color::{Hsl, Hsv, Rgb};
pub use error::ColorError;
pub use event::PointerEvent;
pub use geometry::{Point, Region, WheelGeometry};
pub use gradient::{
    ring_colors, square_stops, GradientStop, RingSample, RING_SAMPLES, ROW_STOPS, SQUARE_ROWS,
};
pub use wheel::ColorWheel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{Hsl, Hsv, Rgb};
    pub use crate::error::ColorError;
    pub use crate::event::PointerEvent;
    pub use crate::geometry::{Point, Region, WheelGeometry};
    pub use crate::wheel::ColorWheel;
}
