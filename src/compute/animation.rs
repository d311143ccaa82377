use glam::Vec2;

use crate::entities::{Facing, SourceRect, SpriteHandle};
use crate::error::ArenaError;

/// Seconds each animation frame stays on screen.
pub const FRAME_DELAY: f32 = 0.1;

/// Frame cursor over a horizontal strip of equally sized frames.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    current_frame: u32,
    elapsed: f32,
    frame_count: u32,
    frame_delay: f32,
}

impl AnimationState {
    pub fn new(frame_count: u32) -> Result<Self, ArenaError> {
        Self::with_delay(frame_count, FRAME_DELAY)
    }

    pub fn with_delay(frame_count: u32, frame_delay: f32) -> Result<Self, ArenaError> {
        if frame_count == 0 {
            return Err(ArenaError::ZeroFrameCount);
        }
        if frame_delay.is_nan() || frame_delay <= 0.0 {
            return Err(ArenaError::InvalidFrameDelay(frame_delay));
        }
        Ok(Self {
            current_frame: 0,
            elapsed: 0.0,
            frame_count,
            frame_delay,
        })
    }

    /// Builds a state for `sheet`, checking the sheet is wide enough to hold
    /// `frame_count` frames of at least one pixel each.
    pub fn for_sheet(sheet: &SpriteHandle, frame_count: u32) -> Result<Self, ArenaError> {
        let state = Self::new(frame_count)?;
        if sheet.width < frame_count {
            return Err(ArenaError::SheetTooNarrow {
                id: sheet.id.0,
                width: sheet.width,
                frames: frame_count,
            });
        }
        Ok(state)
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulate `delta_time`; once a full frame delay has built up, step to
    /// the next frame and start accumulating from zero again.
    pub fn advance(&mut self, delta_time: f32) {
        self.elapsed += delta_time;
        if self.elapsed >= self.frame_delay {
            self.current_frame = (self.current_frame + 1) % self.frame_count;
            self.elapsed = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.elapsed = 0.0;
    }

    pub fn frame_width(&self, sheet: &SpriteHandle) -> u32 {
        sheet.width / self.frame_count
    }

    /// Size of one frame, which is what an animated entity occupies on screen.
    pub fn frame_size(&self, sheet: &SpriteHandle) -> Vec2 {
        Vec2::new(self.frame_width(sheet) as f32, sheet.height as f32)
    }

    pub fn source_rect(&self, sheet: &SpriteHandle) -> SourceRect {
        let width = self.frame_width(sheet);
        SourceRect {
            x: self.current_frame * width,
            y: 0,
            width,
            height: sheet.height,
        }
    }
}

/// Picks the facing for a movement vector by its dominant axis.
/// Ties between the axes go to the vertical strips.
pub fn facing_for(direction: Vec2) -> Facing {
    if direction == Vec2::ZERO {
        Facing::Stationary
    } else if direction.x.abs() > direction.y.abs() {
        if direction.x < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    } else if direction.y < 0.0 {
        Facing::Up
    } else {
        Facing::Down
    }
}

/// One animation strip per walking facing plus the still image shown while
/// standing.
#[derive(Clone, Debug)]
pub struct DirectionalAnimator {
    idle: SpriteHandle,
    strips: [(SpriteHandle, AnimationState); 4],
    facing: Facing,
}

impl DirectionalAnimator {
    /// `walk` holds the up, down, left and right sheets in that order.
    pub fn new(idle: SpriteHandle, walk: [SpriteHandle; 4], frame_count: u32) -> Result<Self, ArenaError> {
        let [up, down, left, right] = walk;
        Ok(Self {
            idle,
            strips: [
                (up, AnimationState::for_sheet(&up, frame_count)?),
                (down, AnimationState::for_sheet(&down, frame_count)?),
                (left, AnimationState::for_sheet(&left, frame_count)?),
                (right, AnimationState::for_sheet(&right, frame_count)?),
            ],
            facing: Facing::Stationary,
        })
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    fn slot(facing: Facing) -> Option<usize> {
        Facing::WALKING.iter().position(|f| *f == facing)
    }

    pub fn state(&self, facing: Facing) -> Option<&AnimationState> {
        Self::slot(facing).map(|i| &self.strips[i].1)
    }

    /// Advance the strip for `facing` and show it.  `Stationary` behaves like
    /// [`DirectionalAnimator::stop`].
    pub fn walk(&mut self, facing: Facing, delta_time: f32) {
        match Self::slot(facing) {
            Some(i) => {
                self.strips[i].1.advance(delta_time);
                self.facing = facing;
            }
            None => self.stop(),
        }
    }

    /// Rewind the strip that was on screen and switch to the still image.
    pub fn stop(&mut self) {
        if let Some(i) = Self::slot(self.facing) {
            self.strips[i].1.reset();
        }
        self.facing = Facing::Stationary;
    }

    /// Sprite and optional source rectangle for what is currently displayed.
    pub fn current_frame(&self) -> (SpriteHandle, Option<SourceRect>) {
        match Self::slot(self.facing) {
            Some(i) => {
                let (sheet, state) = &self.strips[i];
                (*sheet, Some(state.source_rect(sheet)))
            }
            None => (self.idle, None),
        }
    }

    /// On-screen size of what is currently displayed.
    pub fn display_size(&self) -> Vec2 {
        match self.current_frame() {
            (_, Some(rect)) => Vec2::new(rect.width as f32, rect.height as f32),
            (sprite, None) => sprite.size(),
        }
    }
}
