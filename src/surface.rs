//! Boundary between the engine and whatever draws the items.
//!
//! A backend implements [`TransformableSurface`]; [`apply_scale_transform`]
//! computes the transform for the surface's current bounds and pushes every
//! piece of it through the trait. The engine never sees a concrete surface.

use bitflags::bitflags;

use crate::affine::Affine;
use crate::compositor::{BlurEffect, ScaleTransform, ShadowStyle, Transform3d};
use crate::geometry::Size;
use crate::options::ScaleOptions;

bitflags! {
    /// Which parts of a computed transform were pushed to a surface
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AppliedEffects: u8 {
        const AFFINE       = 0b0001;
        const TRANSFORM_3D = 0b0010;
        const SHADOW       = 0b0100;
        const BLUR         = 0b1000;
    }
}

/// Something that can display a transformed item.
pub trait TransformableSurface {
    /// Current size of the element. Read on every application, never cached.
    fn bounds(&self) -> Size;

    fn apply_affine(&mut self, affine: &Affine);

    /// `None` resets the layer to no 3D component.
    fn apply_transform_3d(&mut self, transform: Option<&Transform3d>);

    /// Only called while shadows are enabled. A surface keeps its last
    /// shadow once they are turned off.
    fn apply_shadow(&mut self, shadow: &ShadowStyle);

    /// `Some` creates or updates the blur overlay, `None` removes it.
    fn apply_blur(&mut self, blur: Option<&BlurEffect>);
}

/// Push an already computed transform to a surface.
pub fn apply<S>(surface: &mut S, transform: &ScaleTransform) -> AppliedEffects
where
    S: TransformableSurface + ?Sized,
{
    let mut applied = AppliedEffects::AFFINE;

    if let Some(shadow) = &transform.shadow {
        surface.apply_shadow(shadow);
        applied |= AppliedEffects::SHADOW;
    }

    surface.apply_affine(&transform.affine);

    surface.apply_transform_3d(transform.transform_3d.as_ref());
    if transform.transform_3d.is_some() {
        applied |= AppliedEffects::TRANSFORM_3D;
    }

    surface.apply_blur(transform.blur.as_ref());
    if transform.blur.is_some() {
        applied |= AppliedEffects::BLUR;
    }

    applied
}

/// Compute the transform for `progress` against the surface's bounds and
/// apply it.
pub fn apply_scale_transform<S>(
    surface: &mut S,
    progress: f32,
    options: &ScaleOptions,
    should_scale: bool,
) -> AppliedEffects
where
    S: TransformableSurface + ?Sized,
{
    let transform =
        ScaleTransform::compute_with_scaling(progress, options, surface.bounds(), should_scale);
    apply(surface, &transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Layout;

    /// Records the order of calls it receives.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        blur: Option<BlurEffect>,
    }

    impl TransformableSurface for Recorder {
        fn bounds(&self) -> Size {
            Size::new(100.0, 100.0)
        }

        fn apply_affine(&mut self, _affine: &Affine) {
            self.calls.push("affine");
        }

        fn apply_transform_3d(&mut self, transform: Option<&Transform3d>) {
            self.calls.push(if transform.is_some() { "3d" } else { "no-3d" });
        }

        fn apply_shadow(&mut self, _shadow: &ShadowStyle) {
            self.calls.push("shadow");
        }

        fn apply_blur(&mut self, blur: Option<&BlurEffect>) {
            self.calls.push("blur");
            self.blur = blur.copied();
        }
    }

    #[test]
    fn test_call_order_and_flags() {
        let mut surface = Recorder::default();
        let applied =
            apply_scale_transform(&mut surface, 0.5, &ScaleOptions::layout(Layout::CoverFlow), true);
        assert_eq!(surface.calls, ["shadow", "affine", "3d", "blur"]);
        assert_eq!(
            applied,
            AppliedEffects::AFFINE | AppliedEffects::SHADOW | AppliedEffects::TRANSFORM_3D
        );
    }

    #[test]
    fn test_shadow_skipped_when_disabled() {
        let mut surface = Recorder::default();
        let applied =
            apply_scale_transform(&mut surface, 0.5, &ScaleOptions::layout(Layout::Cylinder), true);
        assert!(!surface.calls.contains(&"shadow"));
        assert!(!applied.contains(AppliedEffects::SHADOW));
    }

    #[test]
    fn test_blur_pushed_through_trait_object() {
        let mut recorder = Recorder::default();
        let surface: &mut dyn TransformableSurface = &mut recorder;
        let applied = apply_scale_transform(surface, -1.0, &ScaleOptions::layout(Layout::Blur), true);
        assert!(applied.contains(AppliedEffects::BLUR));
        assert!(recorder.blur.is_some());
    }
}
