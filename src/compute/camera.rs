use glam::Vec2;

/// Default deadzone half extents in pixels.
pub const DEADZONE_HALF_EXTENTS: Vec2 = Vec2::new(320.0, 180.0);

/// Camera that stays put while the target is inside a rectangular window
/// around the focus, and drags that window's edge along once it leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub focus: Vec2,
    pub zoom: Vec2,
    pub rotation: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

/// One axis of the deadzone rule.
fn track_axis(focus: f32, target: f32, half: f32) -> f32 {
    let delta = target - focus;
    if delta > half {
        target - half
    } else if delta < -half {
        target + half
    } else {
        focus
    }
}

impl Camera {
    pub fn new(focus: Vec2) -> Self {
        Self {
            focus,
            zoom: Vec2::ONE,
            rotation: 0.0,
        }
    }

    /// Move the focus so `target` is back on the deadzone edge, then clamp the
    /// focus to `[0, world_size]` on both axes.
    pub fn follow(&mut self, target: Vec2, deadzone_half: Vec2, world_size: Vec2) {
        let focus = Vec2::new(
            track_axis(self.focus.x, target.x, deadzone_half.x),
            track_axis(self.focus.y, target.y, deadzone_half.y),
        );
        self.focus = focus.clamp(Vec2::ZERO, world_size);
    }

    /// Project a world point into a viewport of `viewport` size whose centre
    /// shows the focus.
    pub fn world_to_view(&self, point: Vec2, viewport: Vec2) -> Vec2 {
        (point - self.focus) * self.zoom + viewport / 2.0
    }
}
