use std::f32::consts::PI;

use paging_transform::prelude::*;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_cylinder_literal_values() {
    let options = ScaleOptions::layout(Layout::Cylinder);
    assert_eq!(options.min_scale_width, 0.55);
    assert_eq!(options.min_scale_height, 0.55);
    assert_eq!(options.max_scale, 0.55);
    assert_eq!(options.scale_ratio_width, 0.0);
    assert_eq!(options.translation_ratio, Point::ZERO);
    assert_eq!(options.min_translation_ratio, Some(Point::ZERO));
    assert_eq!(options.max_translation_ratio, Some(Point::ZERO));
    assert!(!options.shadow_enabled);

    let rotation = options.rotation_3d.unwrap();
    assert_eq!(rotation.angle, PI / 4.0);
    assert_eq!((rotation.min_angle, rotation.max_angle), (-PI, PI));
    assert!(approx_eq(rotation.m34 * 1e4, -5.6));

    let translation = options.translation_3d.unwrap();
    assert_eq!(translation.min_translate_ratios, Vec3::new(0.0, 0.0, 1.25));
    assert_eq!(translation.max_translate_ratios, Vec3::new(0.0, 0.0, 1.25));
}

#[test]
fn test_linear_literal_values() {
    let options = ScaleOptions::layout(Layout::Linear);
    assert_eq!(options.min_scale_width, 0.6);
    assert_eq!(options.min_scale_height, 0.6);
    assert_eq!(options.scale_ratio_width, 0.4);
    assert_eq!(options.scale_ratio_height, 0.4);
    assert_eq!(options.translation_ratio, Point::new(0.66, 0.2));
    assert_eq!(options.max_translation_ratio, Some(Point::new(2.0, 0.0)));
    assert!(options.keep_vertical_spacing_equal);
    assert!(options.keep_horizontal_spacing_equal);
    assert_eq!(options.scale_curve, TransformCurve::Linear);
    assert_eq!(options.translation_curve, TransformCurve::Linear);
}

#[test]
fn test_rotary_literal_values() {
    let options = ScaleOptions::layout(Layout::Rotary);
    assert_eq!(options.min_scale(), 0.0);
    assert_eq!(options.translation_ratio, Point::new(0.1, 0.1));
    assert_eq!(options.min_translation_ratio, Some(Point::new(-1.0, 0.0)));
    assert_eq!(options.max_translation_ratio, Some(Point::new(1.0, 1.0)));
    let rotation = options.rotation_3d.unwrap();
    assert_eq!(rotation.angle, PI / 15.0);
    assert_eq!((rotation.x, rotation.y, rotation.z), (0.0, 0.0, 1.0));
    assert_eq!(rotation.m34, -0.004);
    let translation = options.translation_3d.unwrap();
    assert_eq!(translation.translate_ratios, Vec3::new(0.9, 0.1, 0.0));
}

#[test]
fn test_ease_presets_pick_curves() {
    let ease_in = ScaleOptions::layout(Layout::EaseIn);
    assert_eq!(ease_in.scale_curve, TransformCurve::EaseIn);
    assert_eq!(ease_in.translation_curve, TransformCurve::Linear);

    let ease_out = ScaleOptions::layout(Layout::EaseOut);
    assert_eq!(ease_out.scale_curve, TransformCurve::Linear);
    assert_eq!(ease_out.translation_curve, TransformCurve::EaseIn);
}

#[test]
fn test_blur_preset() {
    let options = ScaleOptions::layout(Layout::Blur);
    assert!(options.blur_effect_enabled);
    assert_eq!(options.blur_effect_radius_ratio, 0.2);
    assert_eq!(options.blur_effect_style, BlurStyle::Light);
}

#[test]
fn test_cover_flow_keeps_shadow() {
    let options = ScaleOptions::layout(Layout::CoverFlow);
    assert!(options.shadow_enabled);
    assert_eq!(options.max_scale, 0.7);
    assert_eq!(options.rotation_3d.unwrap().angle, PI / 1.65);
}

#[test]
fn test_every_preset_reproducible_and_named() {
    for layout in Layout::ALL {
        assert_eq!(ScaleOptions::layout(layout), layout.options());
        assert_eq!(layout.to_string().parse::<Layout>(), Ok(layout));
    }
    assert!("carousel".parse::<Layout>().is_err());
}

#[test]
fn test_copies_are_independent() {
    let mut edited = ScaleOptions::layout(Layout::Linear);
    edited.max_scale = 2.0;
    assert_eq!(ScaleOptions::layout(Layout::Linear).max_scale, 1.0);
}

#[test]
fn test_inverted_cylinder_depth_is_fixed() {
    // Inverted z bounds: the cap always wins
    let options = ScaleOptions::layout(Layout::InvertedCylinder);
    let size = Size::new(100.0, 100.0);
    for progress in [-1.0, -0.3, 0.0, 0.6, 1.0] {
        let t = ScaleTransform::compute(progress, &options, size);
        let matrix = t.transform_3d.unwrap().matrix;
        let expected = Transform::from_affine(&t.affine)
            .with_perspective(-0.002)
            .then(&Transform::rotate_axis(
                (PI / 3.0 * progress).max(-PI).min(PI),
                0.0,
                -1.0,
                0.0,
            ))
            .then(&Transform::translate_3d(
                (0.1 * progress * 100.0).max(-5.0).min(5.0),
                0.0,
                -86.0,
            ));
        for (a, b) in matrix.data.iter().zip(expected.data.iter()) {
            assert!(approx_eq(*a, *b), "progress {progress}");
        }
    }
}
