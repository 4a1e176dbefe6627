use std::time::Duration;

/// Duration of every panel height transition.
pub const PANEL_DURATION: Duration = Duration::from_millis(300);

/// Which way a panel is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Expand,
    Collapse,
}

impl Direction {
    pub fn is_expand(self) -> bool {
        self == Direction::Expand
    }
}

/// Configuration for a height transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new(PANEL_DURATION, Easing::STANDARD)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Material "standard" curve, `cubic-bezier(.4, 0, .2, 1)`.
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

/// One axis of a cubic bezier through (0,0) and (1,1).
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < 1e-6 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled; x is monotonic in s for x1, x2 in [0, 1], so bisect.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

/// The two keyframes of a panel height transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub from: f32,
    pub to: f32,
}

impl Keyframes {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// Keyframes for moving a panel with the given natural height.
    pub fn for_direction(direction: Direction, natural: f32) -> Self {
        match direction {
            Direction::Expand => Self::new(0.0, natural),
            Direction::Collapse => Self::new(natural, 0.0),
        }
    }

    /// Height at eased progress `t`.
    pub fn at(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_curve_endpoints_and_shape() {
        assert_eq!(Easing::STANDARD.apply(0.0), 0.0);
        assert_eq!(Easing::STANDARD.apply(1.0), 1.0);
        // Decelerating curve: ahead of linear at the midpoint.
        let mid = Easing::STANDARD.apply(0.5);
        assert!(mid > 0.5 && mid < 1.0, "mid = {mid}");
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let easing = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((easing.apply(t) - t).abs() < 1e-3, "t = {t}");
        }
    }

    #[test]
    fn keyframes_for_direction() {
        assert_eq!(
            Keyframes::for_direction(Direction::Expand, 120.0),
            Keyframes::new(0.0, 120.0)
        );
        assert_eq!(
            Keyframes::for_direction(Direction::Collapse, 120.0),
            Keyframes::new(120.0, 0.0)
        );
        assert_eq!(Keyframes::new(100.0, 0.0).at(0.25), 75.0);
    }
}
