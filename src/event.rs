//! Pointer events the wheel responds to.

use crate::geometry::Point;

/// A normalized pointer event in widget-local coordinates.
///
/// The embedding adapter is responsible for flattening platform mouse/touch
/// events into these before handing them to the wheel; the core never sees
/// raw platform event objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Pressed { position: Point },
    /// Pointer moved.
    Moved { position: Point },
    /// Pointer released. The release ends any drag session no matter where
    /// the pointer is.
    Released,
}
