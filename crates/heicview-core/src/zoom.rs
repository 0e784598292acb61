use std::fmt;

use crate::consts::{
    DEFAULT_ZOOM, MIN_ZOOM, WHEEL_POINTS_PER_NOTCH, ZOOM_STEP, ZOOM_STEP_COARSE, ZOOM_STEP_FINE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel-up zooms in, wheel-down zooms out; zero means no zoom.
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Unit a wheel delta is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelUnit {
    /// Pixel-precise scrolling (touchpads, high-resolution wheels).
    Point,
    Line,
    Page,
}

/// Turns wheel deltas into whole notches, so a wheel notch zooms exactly as
/// far as one menu click.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelAccumulator {
    pending: f32,
}

impl WheelAccumulator {
    /// Add a delta and return the signed number of completed notches
    /// (positive is wheel-up).
    pub fn feed(&mut self, delta: f32, unit: WheelUnit) -> i32 {
        let notches = match unit {
            WheelUnit::Point => delta / WHEEL_POINTS_PER_NOTCH,
            WheelUnit::Line | WheelUnit::Page => delta,
        };
        self.pending += notches;
        let whole = self.pending.trunc();
        self.pending -= whole;
        whole as i32
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Modifier keys held while a zoom action fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomModifiers {
    pub control: bool,
    pub shift: bool,
}

impl ZoomModifiers {
    pub const NONE: Self = Self {
        control: false,
        shift: false,
    };

    /// Step size for these modifiers. Shift takes precedence over Control.
    pub fn step(&self) -> u32 {
        if self.shift {
            ZOOM_STEP_COARSE
        } else if self.control {
            ZOOM_STEP_FINE
        } else {
            ZOOM_STEP
        }
    }
}

/// Integer zoom percentage with a floor of [`MIN_ZOOM`] and no ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomController {
    level: u32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl ZoomController {
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn reset(&mut self) {
        self.level = DEFAULT_ZOOM;
    }

    /// Apply one zoom action and return the new level.
    pub fn adjust(&mut self, direction: ZoomDirection, modifiers: ZoomModifiers) -> u32 {
        let step = modifiers.step();
        let next = match direction {
            ZoomDirection::In => self.level.saturating_add(step),
            ZoomDirection::Out => self.level.saturating_sub(step),
        };
        self.level = next.max(MIN_ZOOM);
        self.level
    }
}

impl fmt::Display for ZoomController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.level)
    }
}
