//! Tunable parameters for the scale transform.
//!
//! [`ScaleOptions`] is a plain value: build one from a [`Layout`] preset or
//! from [`ScaleOptions::default`], override fields directly or through the
//! `with_*` builders, then hand it to
//! [`ScaleTransform::compute`](crate::ScaleTransform::compute) as often as
//! needed. Every ratio is relative to the element size passed to that call.

mod layout;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::curve::TransformCurve;
use crate::geometry::{Color, Point, Vec3};

pub use layout::{Layout, UnknownLayout};

/// Style of the blur overlay placed over an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlurStyle {
    ExtraLight,
    #[default]
    Light,
    Dark,
    Regular,
    Prominent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blur style `{0}`")]
pub struct UnknownBlurStyle(pub String);

impl BlurStyle {
    pub const ALL: [BlurStyle; 5] = [
        BlurStyle::ExtraLight,
        BlurStyle::Light,
        BlurStyle::Dark,
        BlurStyle::Regular,
        BlurStyle::Prominent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlurStyle::ExtraLight => "extraLight",
            BlurStyle::Light => "light",
            BlurStyle::Dark => "dark",
            BlurStyle::Regular => "regular",
            BlurStyle::Prominent => "prominent",
        }
    }
}

impl fmt::Display for BlurStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlurStyle {
    type Err = UnknownBlurStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| UnknownBlurStyle(s.to_string()))
    }
}

/// 3D rotation driven by progress.
///
/// The applied angle is `angle * progress`, raised to `min_angle` and then
/// capped at `max_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation3dOptions {
    /// Angle in radians at progress 1
    pub angle: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    /// Rotation axis
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Perspective term, see [`Transform::m34`](crate::Transform::m34)
    pub m34: f32,
    pub is_double_sided: bool,
}

impl Rotation3dOptions {
    pub fn new(angle: f32, min_angle: f32, max_angle: f32, axis: Vec3, m34: f32) -> Self {
        Self {
            angle,
            min_angle,
            max_angle,
            x: axis.x,
            y: axis.y,
            z: axis.z,
            m34,
            is_double_sided: false,
        }
    }

    pub fn double_sided(mut self, is_double_sided: bool) -> Self {
        self.is_double_sided = is_double_sided;
        self
    }
}

/// 3D translation driven by progress.
///
/// `x` follows the sign of progress, `y` and `z` follow its magnitude. The
/// x and z axes are scaled by the element width, y by the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation3dOptions {
    pub translate_ratios: Vec3,
    pub min_translate_ratios: Vec3,
    pub max_translate_ratios: Vec3,
}

impl Translation3dOptions {
    pub fn new(translate_ratios: Vec3, min_translate_ratios: Vec3, max_translate_ratios: Vec3) -> Self {
        Self {
            translate_ratios,
            min_translate_ratios,
            max_translate_ratios,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOptions {
    pub min_scale_width: f32,
    pub min_scale_height: f32,
    pub max_scale: f32,
    /// How much the width shrinks per unit of curved progress
    pub scale_ratio_width: f32,
    pub scale_ratio_height: f32,

    /// Translation at progress 1, as a fraction of the element size
    pub translation_ratio: Point,
    pub min_translation_ratio: Option<Point>,
    pub max_translation_ratio: Option<Point>,
    /// Pull scaled items toward the focal item so horizontal gaps stay equal
    pub keep_horizontal_spacing_equal: bool,
    pub keep_vertical_spacing_equal: bool,

    pub scale_curve: TransformCurve,
    pub translation_curve: TransformCurve,

    pub shadow_enabled: bool,
    pub shadow_color: Color,
    pub shadow_opacity_min: f32,
    pub shadow_opacity_max: f32,
    pub shadow_radius_min: f32,
    pub shadow_radius_max: f32,
    pub shadow_offset_min: Point,
    pub shadow_offset_max: Point,

    pub blur_effect_enabled: bool,
    /// Blur radius at progress 1
    pub blur_effect_radius_ratio: f32,
    pub blur_effect_style: BlurStyle,

    pub rotation_3d: Option<Rotation3dOptions>,
    pub translation_3d: Option<Translation3dOptions>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            min_scale_width: 0.75,
            min_scale_height: 0.75,
            max_scale: 1.0,
            scale_ratio_width: 0.25,
            scale_ratio_height: 0.25,
            translation_ratio: Point::new(0.93, 0.36),
            min_translation_ratio: Some(Point::new(-5.0, -5.0)),
            max_translation_ratio: Some(Point::new(5.0, 5.0)),
            keep_horizontal_spacing_equal: true,
            keep_vertical_spacing_equal: true,
            scale_curve: TransformCurve::Linear,
            translation_curve: TransformCurve::Linear,
            shadow_enabled: true,
            shadow_color: Color::BLACK,
            shadow_opacity_min: 0.2,
            shadow_opacity_max: 0.5,
            shadow_radius_min: 4.0,
            shadow_radius_max: 10.0,
            shadow_offset_min: Point::new(0.0, 3.0),
            shadow_offset_max: Point::new(0.0, 6.0),
            blur_effect_enabled: false,
            blur_effect_radius_ratio: 0.4,
            blur_effect_style: BlurStyle::Light,
            rotation_3d: None,
            translation_3d: None,
        }
    }
}

impl ScaleOptions {
    /// Minimum scale, read from the width component.
    pub fn min_scale(&self) -> f32 {
        self.min_scale_width
    }

    /// Set the minimum scale for both axes.
    pub fn set_min_scale(&mut self, min_scale: f32) {
        self.min_scale_width = min_scale;
        self.min_scale_height = min_scale;
    }

    /// Scale ratio, read from the width component.
    pub fn scale_ratio(&self) -> f32 {
        self.scale_ratio_width
    }

    /// Set the scale ratio for both axes.
    pub fn set_scale_ratio(&mut self, scale_ratio: f32) {
        self.scale_ratio_width = scale_ratio;
        self.scale_ratio_height = scale_ratio;
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.set_min_scale(min_scale);
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_scale_ratio(mut self, scale_ratio: f32) -> Self {
        self.set_scale_ratio(scale_ratio);
        self
    }

    pub fn with_translation_ratio(mut self, x: f32, y: f32) -> Self {
        self.translation_ratio = Point::new(x, y);
        self
    }

    pub fn with_translation_bounds(mut self, min: Option<Point>, max: Option<Point>) -> Self {
        self.min_translation_ratio = min;
        self.max_translation_ratio = max;
        self
    }

    pub fn with_curves(mut self, scale: TransformCurve, translation: TransformCurve) -> Self {
        self.scale_curve = scale;
        self.translation_curve = translation;
        self
    }

    pub fn with_shadow(mut self, enabled: bool) -> Self {
        self.shadow_enabled = enabled;
        self
    }

    pub fn with_blur(mut self, radius_ratio: f32, style: BlurStyle) -> Self {
        self.blur_effect_enabled = true;
        self.blur_effect_radius_ratio = radius_ratio;
        self.blur_effect_style = style;
        self
    }

    pub fn with_rotation_3d(mut self, rotation: Rotation3dOptions) -> Self {
        self.rotation_3d = Some(rotation);
        self
    }

    pub fn with_translation_3d(mut self, translation: Translation3dOptions) -> Self {
        self.translation_3d = Some(translation);
        self
    }
}
