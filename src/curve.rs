//! Transform curves.
//!
//! A curve remaps the linear magnitude of an item's progress (`|progress|`,
//! nominally in `[0, 1]`) before it drives scale or translation. Both eased
//! curves are logarithmic and keep the endpoints fixed: `0 -> 0`, `1 -> 1`.
//!
//! - [`TransformCurve::Linear`] - identity
//! - [`TransformCurve::EaseIn`] - `log10(1 + 9p)`, moves quickly near the focal point
//! - [`TransformCurve::EaseOut`] - `1 - log10(10 - 9p)`, moves slowly near the focal point

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transform curve `{0}`")]
pub struct UnknownCurve(pub String);

impl TransformCurve {
    pub const ALL: [TransformCurve; 3] = [
        TransformCurve::Linear,
        TransformCurve::EaseIn,
        TransformCurve::EaseOut,
    ];

    /// Map a linear progress magnitude through this curve.
    ///
    /// Linear extrapolates past 1. The eased curves saturate at 1, since
    /// their logarithms leave `[0, 1]` (and `EaseOut` turns NaN) beyond it.
    pub fn compute_from_linear(&self, progress: f32) -> f32 {
        match self {
            TransformCurve::Linear => progress,
            TransformCurve::EaseIn => (1.0 + progress.min(1.0) * 9.0).log10(),
            TransformCurve::EaseOut => 1.0 - (1.0 + (9.0 - progress.min(1.0) * 9.0)).log10(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformCurve::Linear => "linear",
            TransformCurve::EaseIn => "easeIn",
            TransformCurve::EaseOut => "easeOut",
        }
    }
}

impl fmt::Display for TransformCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformCurve {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| UnknownCurve(s.to_string()))
    }
}
