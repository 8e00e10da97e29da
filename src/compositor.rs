//! The transform computation engine.
//!
//! [`ScaleTransform::compute`] is a pure function of progress, options and
//! element size. It never fails: out-of-range values are clamped, and clamp
//! pairs are applied as "raise to the floor, then cap at the ceiling", so a
//! floor above its ceiling resolves to the ceiling.

use crate::affine::Affine;
use crate::geometry::{Color, Size};
use crate::options::{BlurStyle, Rotation3dOptions, ScaleOptions, Translation3dOptions};
use crate::transform::Transform;

/// Shadow parameters for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub offset: (f32, f32),
    pub radius: f32,
    pub opacity: f32,
}

/// Blur overlay parameters for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurEffect {
    pub style: BlurStyle,
    pub radius: f32,
    /// Offset of the overlay so it follows the translated element
    pub translation: (f32, f32),
}

/// The 3D layer transform, present when a 3D sub-config is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3d {
    pub matrix: Transform,
    /// Set only when a rotation is configured
    pub double_sided: Option<bool>,
}

/// Everything computed for one item at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    /// Final (width, height) scale factors
    pub scale: (f32, f32),
    /// Final (x, y) translation
    pub translation: (f32, f32),
    /// `Translate(translation) * Scale(scale)`
    pub affine: Affine,
    pub transform_3d: Option<Transform3d>,
    pub shadow: Option<ShadowStyle>,
    pub blur: Option<BlurEffect>,
}

impl ScaleTransform {
    /// Compute the transform for an item at `progress`.
    ///
    /// `progress` is 0 at the focal point and about ±1 one page away. Values
    /// beyond ±1 are accepted and clamped by the options' bounds.
    pub fn compute(progress: f32, options: &ScaleOptions, size: Size) -> Self {
        Self::compute_with_scaling(progress, options, size, true)
    }

    /// Like [`compute`](Self::compute), but with `should_scale = false` the
    /// scale is capped at the minimum scale, giving a translation-led variant
    /// for children that should not grow toward the focal point.
    pub fn compute_with_scaling(
        progress: f32,
        options: &ScaleOptions,
        size: Size,
        should_scale: bool,
    ) -> Self {
        let shadow = shadow_style(progress, options);
        let (scale, translation) = scale_and_translation(progress, options, size, should_scale);
        let affine = Affine::IDENTITY
            .translated_by(translation.0, translation.1)
            .scaled_by(scale.0, scale.1);
        let transform_3d = transform_3d(progress, options, size, &affine);
        let blur = blur_effect(progress, options, &affine);

        log::trace!(
            "progress {:.3}: scale {:?}, translation {:?}, 3d {}, blur {:?}",
            progress,
            scale,
            translation,
            transform_3d.is_some(),
            blur.map(|b| b.radius)
        );

        Self {
            scale,
            translation,
            affine,
            transform_3d,
            shadow,
            blur,
        }
    }

    /// The matrix to put on the layer: the 3D transform when present,
    /// otherwise the affine lifted into 3D.
    pub fn layer_transform(&self) -> Transform {
        match &self.transform_3d {
            Some(t) => t.matrix,
            None => Transform::from_affine(&self.affine),
        }
    }
}

/// Raise `value` to `min`, then cap it at `max`.
fn clamp_ordered(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

fn shadow_style(progress: f32, options: &ScaleOptions) -> Option<ShadowStyle> {
    if !options.shadow_enabled {
        return None;
    }
    let multiplier = 1.0 - progress.abs();
    Some(ShadowStyle {
        color: options.shadow_color,
        offset: (
            options.shadow_offset_min.x.max(multiplier * options.shadow_offset_max.x),
            options.shadow_offset_min.y.max(multiplier * options.shadow_offset_max.y),
        ),
        radius: options.shadow_radius_min.max(multiplier * options.shadow_radius_max),
        opacity: options.shadow_opacity_min.max(multiplier * options.shadow_opacity_max),
    })
}

fn scale_and_translation(
    progress: f32,
    options: &ScaleOptions,
    size: Size,
    should_scale: bool,
) -> ((f32, f32), (f32, f32)) {
    let scale_progress = options.scale_curve.compute_from_linear(progress.abs());

    let mut scale_width = clamp_ordered(
        1.0 - scale_progress * options.scale_ratio_width,
        options.min_scale_width,
        options.max_scale,
    );
    let mut scale_height = clamp_ordered(
        1.0 - scale_progress * options.scale_ratio_height,
        options.min_scale_height,
        options.max_scale,
    );

    let mut x_adjustment = 0.0;
    let mut y_adjustment = 0.0;
    if options.keep_horizontal_spacing_equal {
        x_adjustment = (1.0 - scale_width) * size.width / 2.0;
        // Items on the right pull left, items on the left pull right
        if progress > 0.0 {
            x_adjustment = -x_adjustment;
        }
    }
    if options.keep_vertical_spacing_equal {
        y_adjustment = (1.0 - scale_height) * size.height / 2.0;
    }

    let translate_progress = options.translation_curve.compute_from_linear(progress.abs());
    let direction = if progress < 0.0 { -1.0 } else { 1.0 };
    let mut translate_x =
        size.width * options.translation_ratio.x * translate_progress * direction - x_adjustment;
    let mut translate_y =
        size.height * options.translation_ratio.y * translate_progress.abs() - y_adjustment;

    if let Some(min) = options.min_translation_ratio {
        let (min_x, min_y) = min.resolve(size);
        translate_x = translate_x.max(min_x);
        translate_y = translate_y.max(min_y);
    }
    if let Some(max) = options.max_translation_ratio {
        let (max_x, max_y) = max.resolve(size);
        translate_x = translate_x.min(max_x);
        translate_y = translate_y.min(max_y);
    }

    if !should_scale {
        scale_width = scale_width.min(options.min_scale_width);
        scale_height = scale_height.min(options.min_scale_height);
    }

    ((scale_width, scale_height), (translate_x, translate_y))
}

fn transform_3d(
    progress: f32,
    options: &ScaleOptions,
    size: Size,
    affine: &Affine,
) -> Option<Transform3d> {
    if options.rotation_3d.is_none() && options.translation_3d.is_none() {
        return None;
    }

    let mut matrix = Transform::from_affine(affine);
    let mut double_sided = None;

    if let Some(rotation) = &options.rotation_3d {
        matrix = matrix
            .with_perspective(rotation.m34)
            .then(&rotation_matrix(progress, rotation));
        double_sided = Some(rotation.is_double_sided);
    }

    if let Some(translation) = &options.translation_3d {
        matrix = matrix.then(&translation_matrix(progress, translation, size));
    }

    Some(Transform3d {
        matrix,
        double_sided,
    })
}

fn rotation_matrix(progress: f32, rotation: &Rotation3dOptions) -> Transform {
    let angle = clamp_ordered(rotation.angle * progress, rotation.min_angle, rotation.max_angle);
    Transform::rotate_axis(angle, rotation.x, rotation.y, rotation.z)
}

fn translation_matrix(progress: f32, translation: &Translation3dOptions, size: Size) -> Transform {
    let ratios = &translation.translate_ratios;
    let min = &translation.min_translate_ratios;
    let max = &translation.max_translate_ratios;

    // z has no matching element dimension, so it borrows the width
    let x = clamp_ordered(
        ratios.x * progress * size.width,
        min.x * size.width,
        max.x * size.width,
    );
    let y = clamp_ordered(
        ratios.y * progress.abs() * size.height,
        min.y * size.height,
        max.y * size.height,
    );
    let z = clamp_ordered(
        ratios.z * progress.abs() * size.width,
        min.z * size.width,
        max.z * size.width,
    );

    Transform::translate_3d(x, y, z)
}

fn blur_effect(progress: f32, options: &ScaleOptions, affine: &Affine) -> Option<BlurEffect> {
    if !options.blur_effect_enabled || options.blur_effect_radius_ratio <= 0.0 {
        return None;
    }
    Some(BlurEffect {
        style: options.blur_effect_style,
        radius: progress.abs() * options.blur_effect_radius_ratio,
        translation: (affine.tx, affine.ty),
    })
}
