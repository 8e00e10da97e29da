use crate::geometry::Size;
use crate::transform::Transform;

/// Position of a transform origin along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Left or top edge
    Start,
    Center,
    /// Right or bottom edge
    End,
    /// Fraction of the element size (0.0 - 1.0)
    Fraction(f32),
    /// Fixed offset in logical pixels from the start edge
    Px(f32),
}

impl Anchor {
    fn resolve(&self, extent: f32) -> f32 {
        match *self {
            Anchor::Start => 0.0,
            Anchor::Center => extent / 2.0,
            Anchor::End => extent,
            Anchor::Fraction(f) => extent * f,
            Anchor::Px(px) => px,
        }
    }
}

/// The pivot point that layer transforms are applied around.
///
/// Computed transforms scale and rotate an item about its own origin, which
/// is the center unless a host says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOrigin {
    pub horizontal: Anchor,
    pub vertical: Anchor,
}

impl TransformOrigin {
    pub const CENTER: Self = Self {
        horizontal: Anchor::Center,
        vertical: Anchor::Center,
    };

    pub const TOP_LEFT: Self = Self {
        horizontal: Anchor::Start,
        vertical: Anchor::Start,
    };

    pub const BOTTOM_RIGHT: Self = Self {
        horizontal: Anchor::End,
        vertical: Anchor::End,
    };

    pub fn fraction(x: f32, y: f32) -> Self {
        Self {
            horizontal: Anchor::Fraction(x),
            vertical: Anchor::Fraction(y),
        }
    }

    pub fn px(x: f32, y: f32) -> Self {
        Self {
            horizontal: Anchor::Px(x),
            vertical: Anchor::Px(y),
        }
    }

    /// Resolve to a point in the element's local coordinates.
    pub fn resolve(&self, size: Size) -> (f32, f32) {
        (
            self.horizontal.resolve(size.width),
            self.vertical.resolve(size.height),
        )
    }

    /// Re-center `matrix` so it pivots around this origin instead of the
    /// local (0, 0).
    pub fn around(&self, matrix: &Transform, size: Size) -> Transform {
        let (ox, oy) = self.resolve(size);
        if ox == 0.0 && oy == 0.0 {
            return *matrix;
        }
        Transform::translate(ox, oy)
            .then(matrix)
            .then(&Transform::translate(-ox, -oy))
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}
