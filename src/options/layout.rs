use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Rotation3dOptions, ScaleOptions, Translation3dOptions};
use crate::curve::TransformCurve;
use crate::geometry::{Point, Vec3};

/// Named preset styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    InvertedCylinder,
    Cylinder,
    CoverFlow,
    Rotary,
    Linear,
    EaseIn,
    EaseOut,
    Blur,
}

/// Returned when a preset name does not match any [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout `{0}`")]
pub struct UnknownLayout(pub String);

impl Layout {
    pub const ALL: [Layout; 8] = [
        Layout::InvertedCylinder,
        Layout::Cylinder,
        Layout::CoverFlow,
        Layout::Rotary,
        Layout::Linear,
        Layout::EaseIn,
        Layout::EaseOut,
        Layout::Blur,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::InvertedCylinder => "invertedCylinder",
            Layout::Cylinder => "cylinder",
            Layout::CoverFlow => "coverFlow",
            Layout::Rotary => "rotary",
            Layout::Linear => "linear",
            Layout::EaseIn => "easeIn",
            Layout::EaseOut => "easeOut",
            Layout::Blur => "blur",
        }
    }

    pub fn options(&self) -> ScaleOptions {
        ScaleOptions::layout(*self)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

impl ScaleOptions {
    /// Build the fully populated options for a preset.
    ///
    /// Fields a preset does not mention keep their [`Default`] values.
    pub fn layout(layout: Layout) -> Self {
        match layout {
            Layout::Blur => Self {
                min_scale_width: 0.6,
                min_scale_height: 0.6,
                scale_ratio_width: 0.4,
                scale_ratio_height: 0.4,
                translation_ratio: Point::new(0.66, 0.2),
                max_translation_ratio: Some(Point::new(2.0, 0.0)),
                blur_effect_enabled: true,
                blur_effect_radius_ratio: 0.2,
                ..Self::default()
            },
            Layout::Linear => Self {
                min_scale_width: 0.6,
                min_scale_height: 0.6,
                scale_ratio_width: 0.4,
                scale_ratio_height: 0.4,
                translation_ratio: Point::new(0.66, 0.2),
                max_translation_ratio: Some(Point::new(2.0, 0.0)),
                keep_vertical_spacing_equal: true,
                keep_horizontal_spacing_equal: true,
                scale_curve: TransformCurve::Linear,
                translation_curve: TransformCurve::Linear,
                ..Self::default()
            },
            Layout::EaseIn => Self {
                min_scale_width: 0.6,
                min_scale_height: 0.6,
                scale_ratio_width: 0.4,
                scale_ratio_height: 0.4,
                translation_ratio: Point::new(0.66, 0.2),
                keep_vertical_spacing_equal: true,
                keep_horizontal_spacing_equal: true,
                scale_curve: TransformCurve::EaseIn,
                translation_curve: TransformCurve::Linear,
                ..Self::default()
            },
            // Named for its overall feel; the translation itself uses the
            // easeIn curve.
            Layout::EaseOut => Self {
                min_scale_width: 0.6,
                min_scale_height: 0.6,
                scale_ratio_width: 0.4,
                scale_ratio_height: 0.4,
                translation_ratio: Point::new(0.66, 0.2),
                keep_vertical_spacing_equal: true,
                keep_horizontal_spacing_equal: true,
                scale_curve: TransformCurve::Linear,
                translation_curve: TransformCurve::EaseIn,
                ..Self::default()
            },
            Layout::Rotary => Self {
                min_scale_width: 0.0,
                min_scale_height: 0.0,
                scale_ratio_width: 0.4,
                scale_ratio_height: 0.4,
                translation_ratio: Point::new(0.1, 0.1),
                min_translation_ratio: Some(Point::new(-1.0, 0.0)),
                max_translation_ratio: Some(Point::new(1.0, 1.0)),
                rotation_3d: Some(Rotation3dOptions::new(
                    PI / 15.0,
                    -PI / 3.0,
                    PI / 3.0,
                    Vec3::new(0.0, 0.0, 1.0),
                    -0.004,
                )),
                translation_3d: Some(Translation3dOptions::new(
                    Vec3::new(0.9, 0.1, 0.0),
                    Vec3::new(-3.0, -0.8, -0.3),
                    Vec3::new(3.0, 0.8, -0.3),
                )),
                ..Self::default()
            },
            Layout::Cylinder => Self {
                min_scale_width: 0.55,
                min_scale_height: 0.55,
                max_scale: 0.55,
                scale_ratio_width: 0.0,
                scale_ratio_height: 0.0,
                translation_ratio: Point::ZERO,
                min_translation_ratio: Some(Point::ZERO),
                max_translation_ratio: Some(Point::ZERO),
                shadow_enabled: false,
                rotation_3d: Some(Rotation3dOptions::new(
                    PI / 4.0,
                    -PI,
                    PI,
                    Vec3::new(0.0, 1.0, 0.0),
                    -0.000_4 - 0.8 * 0.000_2,
                )),
                translation_3d: Some(Translation3dOptions::new(
                    Vec3::ZERO,
                    Vec3::new(0.0, 0.0, 1.25),
                    Vec3::new(0.0, 0.0, 1.25),
                )),
                ..Self::default()
            },
            // The z bounds are inverted (min > max), so the cap always wins
            // and every item sits at -0.86 of the width.
            Layout::InvertedCylinder => Self {
                min_scale_width: 1.2,
                min_scale_height: 1.2,
                max_scale: 1.2,
                scale_ratio_width: 0.0,
                scale_ratio_height: 0.0,
                translation_ratio: Point::ZERO,
                min_translation_ratio: Some(Point::ZERO),
                max_translation_ratio: Some(Point::ZERO),
                shadow_enabled: false,
                rotation_3d: Some(Rotation3dOptions::new(
                    PI / 3.0,
                    -PI,
                    PI,
                    Vec3::new(0.0, -1.0, 0.0),
                    -0.002,
                )),
                translation_3d: Some(Translation3dOptions::new(
                    Vec3::new(0.1, 0.0, 0.0),
                    Vec3::new(-0.05, 0.0, 0.86),
                    Vec3::new(0.05, 0.0, -0.86),
                )),
                ..Self::default()
            },
            Layout::CoverFlow => Self {
                min_scale_width: 0.7,
                min_scale_height: 0.7,
                max_scale: 0.7,
                scale_ratio_width: 0.0,
                scale_ratio_height: 0.0,
                translation_ratio: Point::ZERO,
                min_translation_ratio: Some(Point::ZERO),
                max_translation_ratio: Some(Point::ZERO),
                shadow_enabled: true,
                rotation_3d: Some(Rotation3dOptions::new(
                    PI / 1.65,
                    -PI / 3.0,
                    PI / 3.0,
                    Vec3::new(0.0, -1.0, 0.0),
                    -0.000_5,
                )),
                translation_3d: Some(Translation3dOptions::new(
                    Vec3::new(0.1, 0.0, -0.7),
                    Vec3::new(-0.1, 0.0, -3.0),
                    Vec3::new(0.1, 0.0, 0.0),
                )),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>(), Ok(layout));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "spiral".parse::<Layout>().unwrap_err();
        assert_eq!(err, UnknownLayout("spiral".into()));
        assert_eq!(err.to_string(), "unknown layout `spiral`");
    }

    #[test]
    fn test_cylinder_values() {
        let options = ScaleOptions::layout(Layout::Cylinder);
        assert_eq!(options.min_scale_width, 0.55);
        assert_eq!(options.max_scale, 0.55);
        assert!(!options.shadow_enabled);
        let rotation = options.rotation_3d.unwrap();
        assert_eq!(rotation.m34, -0.000_4 - 0.8 * 0.000_2);
        assert_eq!((rotation.x, rotation.y, rotation.z), (0.0, 1.0, 0.0));
    }

    #[test]
    fn test_only_3d_layouts_have_rotation() {
        for layout in Layout::ALL {
            let has_3d = layout.options().rotation_3d.is_some();
            let expected = matches!(
                layout,
                Layout::InvertedCylinder | Layout::Cylinder | Layout::CoverFlow | Layout::Rotary
            );
            assert_eq!(has_3d, expected, "{layout}");
        }
    }

    #[test]
    fn test_factory_is_reproducible() {
        for layout in Layout::ALL {
            assert_eq!(ScaleOptions::layout(layout), ScaleOptions::layout(layout));
        }
    }
}
