//! The wheel interaction engine: drag state, hue angle, square position, and
//! the public color API.

use log::{debug, trace};

use crate::color::{self, Hsl, Hsv, Rgb};
use crate::error::ColorError;
use crate::event::PointerEvent;
use crate::geometry::{Point, Region, WheelGeometry};
use crate::gradient::{self, GradientStop, RingSample};

/// Which part of the wheel an active drag session is bound to.
///
/// A session is entered only from a press hit test and keeps tracking its
/// region until release, even when the pointer leaves the widget (sticky
/// drag). The two modes are mutually exclusive, so exactly one logical drag
/// can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Ring,
    Square,
}

/// An HSV color wheel: a hue ring around an inscribed saturation/value square.
///
/// Owns the selected hue angle and the fractional square position, and turns
/// widget-local pointer events into selection changes. All color getters go
/// through the full-precision conversion layer, rounding once on output.
#[derive(Debug, Clone)]
pub struct ColorWheel {
    geometry: WheelGeometry,
    /// Selected hue angle in radians, normalized into `[0, 2π)`
    hue_angle: f32,
    /// Fractional saturation (horizontal) and value (vertical, top = 1)
    /// within the square field, each in `[0, 1]`
    square_point: (f32, f32),
    /// Active drag session, if any
    drag: Option<DragMode>,
}

impl ColorWheel {
    /// Create a wheel of `diameter` pixels, selecting white (hue 0, zero
    /// saturation, full value).
    pub fn new(diameter: f32) -> Self {
        Self {
            geometry: WheelGeometry::new(diameter),
            hue_angle: 0.0,
            square_point: (0.0, 1.0),
            drag: None,
        }
    }

    /// The wheel's derived geometry.
    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Selected hue angle in radians, in `[0, 2π)`.
    pub fn hue_angle(&self) -> f32 {
        self.hue_angle
    }

    /// Selected hue in degrees, in `[0, 360)`.
    pub fn hue_degrees(&self) -> f32 {
        self.hue_angle.to_degrees()
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Classify a widget-local pointer position.
    pub fn hit_test(&self, position: Point) -> Region {
        self.geometry.hit_test(position)
    }

    /// Handle a normalized pointer event, returning `true` when the selected
    /// color may have changed and the adapter should repaint and notify.
    ///
    /// A press enters a drag session for the region it hits (none for
    /// `Outside`); moves update that session's region no matter where the
    /// pointer travels; a release ends the session unconditionally.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Pressed { position } => match self.geometry.hit_test(position) {
                Region::Ring => {
                    self.drag = Some(DragMode::Ring);
                    debug!("drag started on ring");
                    self.set_hue_from_point(position);
                    true
                }
                Region::Square => {
                    self.drag = Some(DragMode::Square);
                    debug!("drag started on square");
                    self.set_square_from_point(position);
                    true
                }
                Region::Outside => false,
            },
            PointerEvent::Moved { position } => match self.drag {
                // Sticky drag: the session keeps tracking its region even
                // once the pointer leaves the widget bounds.
                Some(DragMode::Ring) => {
                    self.set_hue_from_point(position);
                    true
                }
                Some(DragMode::Square) => {
                    self.set_square_from_point(position);
                    true
                }
                None => false,
            },
            PointerEvent::Released => {
                if self.drag.take().is_some() {
                    debug!("drag ended");
                }
                false
            }
        }
    }

    /// Set the hue from the angle between the wheel center and `position`,
    /// returning the stored angle in radians.
    ///
    /// Valid for any position, including far outside the widget; only the
    /// direction from the center matters.
    pub fn set_hue_from_point(&mut self, position: Point) -> f32 {
        self.hue_angle = self.geometry.angle_to(position);
        trace!("hue angle set to {:.3} rad", self.hue_angle);
        self.hue_angle
    }

    /// Move the square selection toward `position`, returning the stored
    /// fractional `(s, v)`.
    ///
    /// Out-of-bounds positions clamp to the nearest edge per axis, so a drag
    /// that overshoots the square keeps the indicator pinned at the boundary
    /// instead of ignoring the move.
    pub fn set_square_from_point(&mut self, position: Point) -> (f32, f32) {
        self.square_point = self.geometry.square_fraction(position);
        trace!(
            "square point set to ({:.3}, {:.3})",
            self.square_point.0,
            self.square_point.1
        );
        self.square_point
    }

    /// The selected color as integer HSV.
    pub fn current_color(&self) -> Hsv {
        let (s, v) = self.square_point;
        Hsv {
            h: color::round_hue(self.hue_degrees()),
            s: color::round_pct(s),
            v: color::round_pct(v),
        }
    }

    /// The selected color as RGB.
    pub fn rgb(&self) -> Rgb {
        let (s, v) = self.square_point;
        let (r, g, b) = color::hsv_to_rgb_f32(self.hue_degrees(), s, v);
        color::rgb_from_f32(r, g, b)
    }

    /// The selected color as six lowercase hex digits.
    pub fn hex(&self) -> String {
        self.rgb().to_hex()
    }

    /// The selected color as integer HSL.
    pub fn hsl(&self) -> Hsl {
        let (s, v) = self.square_point;
        let (h, s, l) = color::hsv_to_hsl_f32(self.hue_degrees(), s, v);
        Hsl {
            h: color::round_hue(h),
            s: color::round_pct(s),
            l: color::round_pct(l),
        }
    }

    /// Select a color, moving the hue angle and square point to match.
    pub fn set_color(&mut self, rgb: Rgb) {
        let (h, s, l) = color::rgb_to_hsl_f32(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
        );
        let (h, s, v) = color::hsl_to_hsv_f32(h, s, l);
        self.hue_angle = h.to_radians();
        self.square_point = (s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
    }

    /// Select a color from a hex string.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        self.set_color(Rgb::from_hex(hex)?);
        Ok(())
    }

    /// Recompute the geometry for a new diameter.
    ///
    /// The stored hue angle and fractional square point are independent of
    /// pixel measurements, so the selected color is unchanged.
    pub fn resize(&mut self, diameter: f32) {
        self.geometry = WheelGeometry::new(diameter);
    }

    /// Sample the hue ring for painting; see [`gradient::ring_colors`].
    pub fn ring_colors(&self) -> Vec<RingSample> {
        gradient::ring_colors()
    }

    /// Gradient stop grid for the square field at the current hue; see
    /// [`gradient::square_stops`].
    pub fn square_gradient_stops(&self) -> Vec<Vec<GradientStop>> {
        gradient::square_stops(self.hue_degrees())
    }

    /// Widget-local position for the ring marker: the middle of the ring band
    /// at the current hue angle.
    pub fn ring_indicator(&self) -> Point {
        let mid = self.geometry.outer_radius - self.geometry.ring_thickness / 2.0;
        Point::new(
            self.geometry.center.x + self.hue_angle.cos() * mid,
            self.geometry.center.y + self.hue_angle.sin() * mid,
        )
    }

    /// Widget-local position for the square marker at the current selection.
    pub fn square_indicator(&self) -> Point {
        let (s, v) = self.square_point;
        self.geometry.square_position(s, v)
    }
}
