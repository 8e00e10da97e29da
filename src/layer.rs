//! An in-memory retained layer implementing [`TransformableSurface`].
//!
//! Hosts that own their own compositor can drive one `Layer` per visible
//! item and read the resolved state back when they draw.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::affine::Affine;
use crate::compositor::{BlurEffect, ShadowStyle, Transform3d};
use crate::geometry::Size;
use crate::options::BlurStyle;
use crate::surface::TransformableSurface;
use crate::transform::Transform;
use crate::transform_origin::TransformOrigin;

/// Unique identifier for a blur overlay
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OverlayId(u64);

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

impl OverlayId {
    fn next() -> Self {
        OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The blur view stacked over an item. A layer owns at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurOverlay {
    id: OverlayId,
    style: BlurStyle,
    pub radius: f32,
    pub translation: (f32, f32),
}

impl BlurOverlay {
    fn new(effect: &BlurEffect) -> Self {
        Self {
            id: OverlayId::next(),
            style: effect.style,
            radius: effect.radius,
            translation: effect.translation,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn style(&self) -> BlurStyle {
        self.style
    }

    /// The overlay's transform: it follows the item's translation but is
    /// never scaled.
    pub fn transform(&self) -> Affine {
        Affine::IDENTITY.translated_by(self.translation.0, self.translation.1)
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    bounds: Size,
    origin: TransformOrigin,
    affine: Affine,
    transform_3d: Option<Transform>,
    double_sided: bool,
    shadow: Option<ShadowStyle>,
    blur_overlay: Option<BlurOverlay>,
}

impl Layer {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            origin: TransformOrigin::CENTER,
            affine: Affine::IDENTITY,
            transform_3d: None,
            double_sided: true,
            shadow: None,
            blur_overlay: None,
        }
    }

    pub fn with_origin(mut self, origin: TransformOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Resize the layer. The next application picks the new size up.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn affine(&self) -> &Affine {
        &self.affine
    }

    pub fn is_double_sided(&self) -> bool {
        self.double_sided
    }

    pub fn shadow(&self) -> Option<&ShadowStyle> {
        self.shadow.as_ref()
    }

    pub fn blur_overlay(&self) -> Option<&BlurOverlay> {
        self.blur_overlay.as_ref()
    }

    /// The layer's transform in local coordinates (pivot at 0, 0).
    pub fn layer_transform(&self) -> Transform {
        self.transform_3d
            .unwrap_or_else(|| Transform::from_affine(&self.affine))
    }

    /// The layer's transform pivoted around its origin.
    pub fn effective_transform(&self) -> Transform {
        self.origin.around(&self.layer_transform(), self.bounds)
    }

    /// Map a point in the layer's own coordinates to where it is drawn.
    pub fn project_point(&self, x: f32, y: f32) -> (f32, f32) {
        let (px, py, _) = self.effective_transform().project_point(x, y, 0.0);
        (px, py)
    }
}

impl TransformableSurface for Layer {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn apply_affine(&mut self, affine: &Affine) {
        self.affine = *affine;
    }

    fn apply_transform_3d(&mut self, transform: Option<&Transform3d>) {
        self.transform_3d = transform.map(|t| t.matrix);
        if let Some(double_sided) = transform.and_then(|t| t.double_sided) {
            self.double_sided = double_sided;
        }
    }

    fn apply_shadow(&mut self, shadow: &ShadowStyle) {
        self.shadow = Some(*shadow);
    }

    fn apply_blur(&mut self, blur: Option<&BlurEffect>) {
        let Some(effect) = blur else {
            if let Some(overlay) = self.blur_overlay.take() {
                log::debug!("Removing blur overlay {:?}", overlay.id);
            }
            return;
        };

        match &mut self.blur_overlay {
            Some(overlay) if overlay.style == effect.style => {
                overlay.radius = effect.radius;
                overlay.translation = effect.translation;
            }
            slot => {
                let overlay = BlurOverlay::new(effect);
                if let Some(old) = slot.as_ref() {
                    log::debug!(
                        "Replacing blur overlay {:?} ({} -> {})",
                        old.id,
                        old.style,
                        effect.style
                    );
                } else {
                    log::debug!("Creating blur overlay {:?} ({})", overlay.id, effect.style);
                }
                *slot = Some(overlay);
            }
        }
    }
}
