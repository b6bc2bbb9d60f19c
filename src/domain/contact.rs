/// Pointer position in disk-local pixels (origin at the disk's top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from `center`
    #[inline]
    pub fn radius_from(&self, center: Pointer) -> f64 {
        (self.x - center.x).hypot(self.y - center.y)
    }

    /// Angle around `center` in degrees, in -180..=180 (screen axes, y down).
    #[inline]
    pub fn angle_from(&self, center: Pointer) -> f64 {
        (self.y - center.y).atan2(self.x - center.x).to_degrees()
    }
}

/// The point where the user grips the disk. Only exists while dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Distance from disk center (px)
    pub radius: f64,
    /// Angle of the latest pointer sample (degrees)
    pub current_angle: f64,
    /// Angle consumed by the previous tick; `None` until a direction can be inferred
    pub previous_angle: Option<f64>,
}

impl Contact {
    /// Contact for a fresh gesture: no previous angle, so the first tick yields zero torque.
    pub fn grab(pointer: Pointer, center: Pointer) -> Self {
        Self {
            radius: pointer.radius_from(center),
            current_angle: pointer.angle_from(center),
            previous_angle: None,
        }
    }

    pub fn follow(&mut self, pointer: Pointer, center: Pointer) {
        self.radius = pointer.radius_from(center);
        self.current_angle = pointer.angle_from(center);
    }
}

/// Drag gesture state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Contact),
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    #[inline]
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            DragState::Dragging(contact) => Some(contact),
            DragState::Idle => None,
        }
    }

    #[inline]
    pub fn contact_mut(&mut self) -> Option<&mut Contact> {
        match self {
            DragState::Dragging(contact) => Some(contact),
            DragState::Idle => None,
        }
    }
}
