use crate::projection::{Point, Size};

/// Which driver currently moves the sphere.
///
/// Exactly one variant is active, so ambient spin and inertia can never run
/// together and a drag always suspends both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveMode {
    /// Constant slow spin about the drift axis
    Ambient,
    /// Post-release rotation with a decaying speed
    Inertia { speed: f64 },
    /// Pointer is down; `last` is the previous drag sample
    Dragging { last: Point },
    /// Ambient spin suspended by the host until `Event::Release`
    Held,
}

impl DriveMode {
    pub fn is_ambient(&self) -> bool {
        matches!(self, DriveMode::Ambient)
    }

    pub fn is_decaying(&self) -> bool {
        matches!(self, DriveMode::Inertia { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DriveMode::Dragging { .. })
    }

    /// Mode to enter when a drag is released with the given speed
    pub fn after_release(speed: f64) -> DriveMode {
        if speed > 0.0 {
            DriveMode::Inertia { speed }
        } else {
            DriveMode::Ambient
        }
    }
}

/// Input delivered to the cloud by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Display-refresh tick for the ambient driver
    AmbientTick,
    /// Display-refresh tick for the inertia driver; `dt` in seconds
    InertiaTick { dt: f64 },
    /// Tick routed to whichever driver is active
    Frame { dt: f64 },
    DragBegin(Point),
    DragMove(Point),
    /// Pointer released; `velocity` in container units per second
    DragEnd { velocity: Point },
    /// Container changed size
    Resize(Size),
    /// Suspend ambient spin
    Hold,
    /// Resume ambient spin after `Hold`
    Release,
}
