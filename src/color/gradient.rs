use crate::color::codec::Color;

/// Which canvas coordinate drives a [`LinearGradient`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientAxis {
    /// `x` normalized by the canvas width.
    #[default]
    LeftToRight,
    /// `y` normalized by the canvas height.
    TopToBottom,
}

/// Linear blend of `c1` towards `c2` at `position / normalizer`.
///
/// `d` is not clamped; callers keep `position` inside `[0, normalizer]`.
pub fn interpolate(c1: Color, c2: Color, position: f64, normalizer: f64) -> Color {
    lerp(c1, c2, position / normalizer)
}

/// Linear blend of `c1` towards `c2` at `d`.
pub fn lerp(c1: Color, c2: Color, d: f64) -> Color {
    Color::rgb(
        c1.r + d * (c2.r - c1.r),
        c1.g + d * (c2.g - c1.g),
        c1.b + d * (c2.b - c1.b),
    )
}

/// A two-stop gradient laid out along one axis of a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    start: Color,
    end: Color,
    axis: GradientAxis,
    normalizer: f64,
}

impl LinearGradient {
    /// Gradient along `axis` of a `width` x `height` canvas.
    ///
    /// The normalizer follows the axis: width for left-to-right, height for top-to-bottom.
    pub fn new(start: Color, end: Color, axis: GradientAxis, width: u32, height: u32) -> Self {
        let normalizer = match axis {
            GradientAxis::LeftToRight => f64::from(width),
            GradientAxis::TopToBottom => f64::from(height),
        };
        Self {
            start,
            end,
            axis,
            normalizer,
        }
    }

    /// Left-to-right gradient over `width` columns.
    pub fn horizontal(start: Color, end: Color, width: u32) -> Self {
        Self {
            start,
            end,
            axis: GradientAxis::LeftToRight,
            normalizer: f64::from(width),
        }
    }

    /// The axis this gradient follows.
    pub fn axis(&self) -> GradientAxis {
        self.axis
    }

    /// Color at canvas coordinate `(x, y)`.
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        let position = match self.axis {
            GradientAxis::LeftToRight => x,
            GradientAxis::TopToBottom => y,
        };
        interpolate(self.start, self.end, position, self.normalizer)
    }

    /// True when both stops are the same color, i.e. the gradient is a solid fill.
    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
