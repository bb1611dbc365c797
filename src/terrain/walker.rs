use crate::foundation::rng::Rng64;

/// Bounds of one height walk.
///
/// Expected to be finite with `step_max` and `step_change` non-negative, as
/// [`crate::MountainConfig::validate`] enforces. Other values degrade the walk but never panic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkParams {
    /// Ceiling of the walk (the canvas height). The floor is always 0.
    pub height_max: f64,
    /// Maximum slope magnitude.
    pub step_max: f64,
    /// Maximum per-column slope change.
    pub step_change: f64,
}

/// A bounded random walk with momentum, advanced once per column.
///
/// The slope drifts by a small random amount every column and the height follows it,
/// reflecting off the floor and the ceiling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightWalker {
    params: WalkParams,
    height: f64,
    slope: f64,
}

impl HeightWalker {
    /// Start a walk at a random height with a random slope.
    ///
    /// Draws exactly twice: the initial height, then the initial slope.
    pub fn start(params: WalkParams, rng: &mut Rng64) -> Self {
        let height = rng.uniform(params.height_max);
        let slope = rng.uniform_signed(params.step_max);
        Self::from_state(params, height, slope)
    }

    /// Resume a walk from a known state.
    pub fn from_state(params: WalkParams, height: f64, slope: f64) -> Self {
        Self {
            params,
            height,
            slope,
        }
    }

    /// Current height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Move to the next column and bounce off the ceiling.
    ///
    /// Draws once (the slope delta). The floor is left to [`HeightWalker::bounce_floor`] so a
    /// caller can adjust the height in between.
    pub fn advance(&mut self, rng: &mut Rng64) {
        let p = self.params;
        self.height += self.slope;
        self.slope += rng.uniform_signed(p.step_change);
        self.slope = self.slope.max(-p.step_max).min(p.step_max);

        if self.height > p.height_max {
            self.height = p.height_max;
            self.slope = -self.slope;
        }
    }

    /// Drop the height by `offset` and reverse direction.
    pub fn push_down(&mut self, offset: f64) {
        self.height -= offset;
        self.slope = -self.slope;
    }

    /// Reflect off the floor if the height went negative.
    pub fn bounce_floor(&mut self) {
        if self.height < 0.0 {
            self.height = 0.0;
            self.slope = -self.slope;
        }
    }

    /// One full column for a walk with nothing in front of it.
    pub fn step(&mut self, rng: &mut Rng64) -> f64 {
        self.advance(rng);
        self.bounce_floor();
        self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terrain/walker.rs"]
mod tests;
