//! Per-item transforms for paginated carousels.
//!
//! A host container reports each visible item's `progress` (0 at the focal
//! point, about ±1 one page away). [`ScaleTransform::compute`] turns that,
//! plus a [`ScaleOptions`] value and the item's size, into a scale and
//! translation, an optional 3D transform, shadow parameters and a blur
//! radius. [`surface::apply_scale_transform`] pushes the result to anything
//! implementing [`TransformableSurface`].
//!
//! ```ignore
//! use paging_transform::prelude::*;
//!
//! let options = ScaleOptions::layout(Layout::CoverFlow);
//! let mut layer = Layer::new(Size::new(240.0, 320.0));
//! apply_scale_transform(&mut layer, -0.4, &options, true);
//! let matrix = layer.effective_transform();
//! ```

pub mod affine;
pub mod compositor;
pub mod curve;
pub mod designer;
pub mod geometry;
pub mod layer;
pub mod options;
pub mod surface;
pub mod transform;
pub mod transform_origin;

pub use affine::Affine;
pub use compositor::{BlurEffect, ScaleTransform, ShadowStyle, Transform3d};
pub use curve::TransformCurve;
pub use geometry::{Color, Point, Size, Vec3};
pub use layer::Layer;
pub use options::{BlurStyle, Layout, Rotation3dOptions, ScaleOptions, Translation3dOptions};
pub use surface::{AppliedEffects, TransformableSurface};
pub use transform::Transform;
pub use transform_origin::TransformOrigin;

pub mod prelude {
    pub use crate::designer::{ControlKind, ControlValue, LayoutDesigner, OptionControl};
    pub use crate::surface::{apply, apply_scale_transform};
    pub use crate::{
        Affine, AppliedEffects, BlurEffect, BlurStyle, Color, Layer, Layout, Point,
        Rotation3dOptions, ScaleOptions, ScaleTransform, ShadowStyle, Size, Transform, Transform3d,
        TransformCurve, TransformOrigin, TransformableSurface, Translation3dOptions, Vec3,
    };
}
