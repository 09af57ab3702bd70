/// Easing curves for the settle transition, named after the CSS timing
/// functions a compositor-backed sink would forward them as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// The browser default curve, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Progress at a linear time `fraction`, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        if *self == Easing::Linear {
            return fraction.clamp(0.0, 1.0);
        }
        let (x1, y1, x2, y2) = self.control_points();
        TimingCurve::new(x1, y1, x2, y2).progress(fraction)
    }

    /// Control points `(x1, y1, x2, y2)` of the equivalent CSS
    /// `cubic-bezier()`.
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// CSS `transition-timing-function` value for this curve.
    pub fn css(&self) -> String {
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

const EPSILON: f32 = 1e-6;

/// Cubic bezier from `(0, 0)` to `(1, 1)` in polynomial form, one axis per
/// `[a, b, c]` triple so that `value(t) = ((a t + b) t + c) t`.
struct TimingCurve {
    x: [f32; 3],
    y: [f32; 3],
}

impl TimingCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: polynomial(x1, x2),
            y: polynomial(y1, y2),
        }
    }

    fn progress(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        evaluate(self.y, self.solve_t(fraction))
    }

    /// Curve parameter whose x equals `x`. Newton steps first, bisection
    /// when the slope flattens out.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = evaluate(self.x, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = slope(self.x, t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..16 {
            let error = evaluate(self.x, t) - x;
            if error.abs() < EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

fn polynomial(p1: f32, p2: f32) -> [f32; 3] {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    [1.0 - c - b, b, c]
}

fn evaluate([a, b, c]: [f32; 3], t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}
