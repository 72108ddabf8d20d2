//! Easing Curves
//!
//! Maps linear progress in [0, 1] to eased progress in [0, 1].

use serde::{Deserialize, Serialize};

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing
    Linear,
    /// Exponential ease-out used for inertial wheel scrolling
    #[default]
    ExpoOut,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    Power4In,
    Power4Out,
    Power4InOut,
}

impl Easing {
    /// Eased progress for linear progress `t`; input is clamped to [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Easing::Power1In => ease_in(t, 2),
            Easing::Power1Out => ease_out(t, 2),
            Easing::Power1InOut => ease_in_out(t, 2),
            Easing::Power2In => ease_in(t, 3),
            Easing::Power2Out => ease_out(t, 3),
            Easing::Power2InOut => ease_in_out(t, 3),
            Easing::Power3In => ease_in(t, 4),
            Easing::Power3Out => ease_out(t, 4),
            Easing::Power3InOut => ease_in_out(t, 4),
            Easing::Power4In => ease_in(t, 5),
            Easing::Power4Out => ease_out(t, 5),
            Easing::Power4InOut => ease_in_out(t, 5),
        }
    }
}

// PowerN curves are polynomials of degree N + 1.
fn ease_in(t: f64, degree: i32) -> f64 {
    t.powi(degree)
}

fn ease_out(t: f64, degree: i32) -> f64 {
    1.0 - (1.0 - t).powi(degree)
}

fn ease_in_out(t: f64, degree: i32) -> f64 {
    if t < 0.5 {
        ease_in(t * 2.0, degree) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0, degree) / 2.0
    }
}
