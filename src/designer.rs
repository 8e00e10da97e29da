//! Live tuning of [`ScaleOptions`].
//!
//! The designer owns a mutable copy of the options for the selected preset,
//! describes the editable fields as a list of controls, and tells observers
//! whenever an edit lands. The engine is only ever called with the
//! designer's copy; it holds no reference back into the designer.
//!
//! ```ignore
//! let mut designer = LayoutDesigner::new();
//! designer.on_code_preview_change(|code| println!("{code}"));
//! designer.select(Some(Layout::Linear));
//! designer.set("Scale ratio", ControlValue::Slider(0.3))?;
//! ```

use thiserror::Error;

use crate::compositor::ScaleTransform;
use crate::curve::{TransformCurve, UnknownCurve};
use crate::geometry::{Color, Point, Size, Vec3};
use crate::options::{
    BlurStyle, Layout, Rotation3dOptions, ScaleOptions, Translation3dOptions, UnknownBlurStyle,
};

/// How a control is presented, with its current value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Slider(f32),
    /// `None` when the underlying optional pair is unset
    DoubleSlider(Option<(f32, f32)>),
    Toggle(bool),
    Segmented {
        options: Vec<&'static str>,
        current: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionControl {
    pub title: &'static str,
    pub kind: ControlKind,
}

/// A new value coming from a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Slider(f32),
    DoubleSlider(f32, f32),
    Toggle(bool),
    Segmented(String),
}

impl ControlValue {
    fn kind_name(&self) -> &'static str {
        match self {
            ControlValue::Slider(_) => "slider",
            ControlValue::DoubleSlider(..) => "double slider",
            ControlValue::Toggle(_) => "toggle",
            ControlValue::Segmented(_) => "segmented",
        }
    }
}

#[derive(Debug, Error)]
pub enum DesignerError {
    #[error("no layout is selected")]
    NoSelection,
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("control `{title}` does not accept a {got} value")]
    KindMismatch { title: String, got: &'static str },
    #[error(transparent)]
    Curve(#[from] UnknownCurve),
    #[error(transparent)]
    BlurStyle(#[from] UnknownBlurStyle),
}

pub type OptionsCallback = Box<dyn FnMut(&ScaleOptions)>;
pub type CodePreviewCallback = Box<dyn FnMut(&str)>;

#[derive(Default)]
pub struct LayoutDesigner {
    selected: Option<(Layout, ScaleOptions)>,
    on_options_change: Option<OptionsCallback>,
    on_code_preview_change: Option<CodePreviewCallback>,
}

impl LayoutDesigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the edited options after every successful edit.
    pub fn on_options_change<F: FnMut(&ScaleOptions) + 'static>(&mut self, callback: F) {
        self.on_options_change = Some(Box::new(callback));
    }

    /// Called with fresh code on selection and after every successful edit.
    pub fn on_code_preview_change<F: FnMut(&str) + 'static>(&mut self, callback: F) {
        self.on_code_preview_change = Some(Box::new(callback));
    }

    /// Select a preset and start editing a fresh copy of it. `None` clears
    /// the selection.
    pub fn select(&mut self, layout: Option<Layout>) {
        self.selected = layout.map(|layout| (layout, ScaleOptions::layout(layout)));
        if let Some((layout, options)) = &self.selected {
            log::debug!("Designer selected layout {}", layout);
            let code = code_preview(options);
            if let Some(callback) = &mut self.on_code_preview_change {
                callback(&code);
            }
        }
    }

    pub fn selected_layout(&self) -> Option<Layout> {
        self.selected.as_ref().map(|(layout, _)| *layout)
    }

    pub fn options(&self) -> Option<&ScaleOptions> {
        self.selected.as_ref().map(|(_, options)| options)
    }

    /// Run the engine with the options being edited.
    pub fn preview(&self, progress: f32, size: Size) -> Option<ScaleTransform> {
        self.options()
            .map(|options| ScaleTransform::compute(progress, options, size))
    }

    /// The editable controls with their current values. Empty when nothing
    /// is selected.
    pub fn controls(&self) -> Vec<OptionControl> {
        let Some(options) = self.options() else {
            return Vec::new();
        };
        let pair = |p: Point| (p.x, p.y);

        vec![
            OptionControl {
                title: "Min scale",
                kind: ControlKind::Slider(options.min_scale()),
            },
            OptionControl {
                title: "Max scale",
                kind: ControlKind::Slider(options.max_scale),
            },
            OptionControl {
                title: "Scale ratio",
                kind: ControlKind::Slider(options.scale_ratio()),
            },
            OptionControl {
                title: "Translation ratio",
                kind: ControlKind::DoubleSlider(Some(pair(options.translation_ratio))),
            },
            OptionControl {
                title: "Min translation ratio",
                kind: ControlKind::DoubleSlider(options.min_translation_ratio.map(pair)),
            },
            OptionControl {
                title: "Max translation ratio",
                kind: ControlKind::DoubleSlider(options.max_translation_ratio.map(pair)),
            },
            OptionControl {
                title: "Keep vertical spacing equal",
                kind: ControlKind::Toggle(options.keep_vertical_spacing_equal),
            },
            OptionControl {
                title: "Keep horizontal spacing equal",
                kind: ControlKind::Toggle(options.keep_horizontal_spacing_equal),
            },
            OptionControl {
                title: "Scale curve",
                kind: ControlKind::Segmented {
                    options: TransformCurve::ALL.iter().map(|c| c.name()).collect(),
                    current: options.scale_curve.name(),
                },
            },
            OptionControl {
                title: "Shadow enabled",
                kind: ControlKind::Toggle(options.shadow_enabled),
            },
            OptionControl {
                title: "Blur effect enabled",
                kind: ControlKind::Toggle(options.blur_effect_enabled),
            },
            OptionControl {
                title: "Blur radius ratio",
                kind: ControlKind::Slider(options.blur_effect_radius_ratio),
            },
            OptionControl {
                title: "Blur effect style",
                kind: ControlKind::Segmented {
                    options: BlurStyle::ALL.iter().map(|s| s.name()).collect(),
                    current: options.blur_effect_style.name(),
                },
            },
        ]
    }

    /// Apply a control edit, then notify observers.
    pub fn set(&mut self, title: &str, value: ControlValue) -> Result<(), DesignerError> {
        let (_, options) = self.selected.as_mut().ok_or(DesignerError::NoSelection)?;
        edit(options, title, value)?;
        log::debug!("Designer edited `{}`", title);

        if let Some(callback) = &mut self.on_options_change {
            callback(options);
        }
        let code = code_preview(options);
        if let Some(callback) = &mut self.on_code_preview_change {
            callback(&code);
        }
        Ok(())
    }
}

fn edit(options: &mut ScaleOptions, title: &str, value: ControlValue) -> Result<(), DesignerError> {
    let mismatch = |value: &ControlValue| DesignerError::KindMismatch {
        title: title.to_string(),
        got: value.kind_name(),
    };

    match (title, value) {
        ("Min scale", ControlValue::Slider(n)) => options.set_min_scale(n),
        ("Max scale", ControlValue::Slider(n)) => options.max_scale = n,
        ("Scale ratio", ControlValue::Slider(n)) => options.set_scale_ratio(n),
        ("Translation ratio", ControlValue::DoubleSlider(x, y)) => {
            options.translation_ratio = Point::new(x, y)
        }
        ("Min translation ratio", ControlValue::DoubleSlider(x, y)) => {
            options.min_translation_ratio = Some(Point::new(x, y))
        }
        ("Max translation ratio", ControlValue::DoubleSlider(x, y)) => {
            options.max_translation_ratio = Some(Point::new(x, y))
        }
        ("Keep vertical spacing equal", ControlValue::Toggle(on)) => {
            options.keep_vertical_spacing_equal = on
        }
        ("Keep horizontal spacing equal", ControlValue::Toggle(on)) => {
            options.keep_horizontal_spacing_equal = on
        }
        ("Scale curve", ControlValue::Segmented(name)) => options.scale_curve = name.parse()?,
        ("Shadow enabled", ControlValue::Toggle(on)) => options.shadow_enabled = on,
        ("Blur effect enabled", ControlValue::Toggle(on)) => options.blur_effect_enabled = on,
        ("Blur radius ratio", ControlValue::Slider(n)) => options.blur_effect_radius_ratio = n,
        ("Blur effect style", ControlValue::Segmented(name)) => {
            options.blur_effect_style = name.parse()?
        }
        (
            "Min scale"
            | "Max scale"
            | "Scale ratio"
            | "Translation ratio"
            | "Min translation ratio"
            | "Max translation ratio"
            | "Keep vertical spacing equal"
            | "Keep horizontal spacing equal"
            | "Scale curve"
            | "Shadow enabled"
            | "Blur effect enabled"
            | "Blur radius ratio"
            | "Blur effect style",
            value,
        ) => return Err(mismatch(&value)),
        (other, _) => return Err(DesignerError::UnknownControl(other.to_string())),
    }
    Ok(())
}

/// Render Rust code that rebuilds `options`.
///
/// Only fields that differ from [`ScaleOptions::default`] are listed.
pub fn code_preview(options: &ScaleOptions) -> String {
    let defaults = ScaleOptions::default();
    let mut fields: Vec<(&str, String)> = Vec::new();

    macro_rules! field {
        ($name:ident, $render:expr) => {
            if options.$name != defaults.$name {
                fields.push((stringify!($name), ($render)(&options.$name)));
            }
        };
    }

    field!(min_scale_width, float);
    field!(min_scale_height, float);
    field!(max_scale, float);
    field!(scale_ratio_width, float);
    field!(scale_ratio_height, float);
    field!(translation_ratio, point);
    field!(min_translation_ratio, |p: &Option<Point>| optional(p, point));
    field!(max_translation_ratio, |p: &Option<Point>| optional(p, point));
    field!(keep_horizontal_spacing_equal, |b: &bool| b.to_string());
    field!(keep_vertical_spacing_equal, |b: &bool| b.to_string());
    field!(scale_curve, |c: &TransformCurve| format!("TransformCurve::{:?}", c));
    field!(translation_curve, |c: &TransformCurve| format!("TransformCurve::{:?}", c));
    field!(shadow_enabled, |b: &bool| b.to_string());
    field!(shadow_color, color);
    field!(shadow_opacity_min, float);
    field!(shadow_opacity_max, float);
    field!(shadow_radius_min, float);
    field!(shadow_radius_max, float);
    field!(shadow_offset_min, point);
    field!(shadow_offset_max, point);
    field!(blur_effect_enabled, |b: &bool| b.to_string());
    field!(blur_effect_radius_ratio, float);
    field!(blur_effect_style, |s: &BlurStyle| format!("BlurStyle::{:?}", s));
    field!(rotation_3d, |r: &Option<Rotation3dOptions>| optional(r, rotation));
    field!(translation_3d, |t: &Option<Translation3dOptions>| optional(t, translation));

    let mut code = String::from("ScaleOptions {\n");
    for (name, value) in fields {
        code.push_str(&format!("    {}: {},\n", name, value));
    }
    code.push_str("    ..ScaleOptions::default()\n}");
    code
}

fn float(value: &f32) -> String {
    format!("{:?}", value)
}

fn point(p: &Point) -> String {
    format!("Point::new({:?}, {:?})", p.x, p.y)
}

fn vec3(v: &Vec3) -> String {
    format!("Vec3::new({:?}, {:?}, {:?})", v.x, v.y, v.z)
}

fn color(c: &Color) -> String {
    format!("Color::rgba({:?}, {:?}, {:?}, {:?})", c.r, c.g, c.b, c.a)
}

fn optional<T>(value: &Option<T>, render: fn(&T) -> String) -> String {
    match value {
        Some(v) => format!("Some({})", render(v)),
        None => "None".to_string(),
    }
}

fn rotation(r: &Rotation3dOptions) -> String {
    let mut code = format!(
        "Rotation3dOptions::new({:?}, {:?}, {:?}, {}, {:?})",
        r.angle,
        r.min_angle,
        r.max_angle,
        vec3(&Vec3::new(r.x, r.y, r.z)),
        r.m34
    );
    if r.is_double_sided {
        code.push_str(".double_sided(true)");
    }
    code
}

fn translation(t: &Translation3dOptions) -> String {
    format!(
        "Translation3dOptions::new({}, {}, {})",
        vec3(&t.translate_ratios),
        vec3(&t.min_translate_ratios),
        vec3(&t.max_translate_ratios)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_no_selection() {
        let mut designer = LayoutDesigner::new();
        assert!(designer.controls().is_empty());
        assert!(designer.preview(0.5, Size::new(10.0, 10.0)).is_none());
        assert!(matches!(
            designer.set("Max scale", ControlValue::Slider(1.0)),
            Err(DesignerError::NoSelection)
        ));
    }

    #[test]
    fn test_controls_reflect_selected_layout() {
        let mut designer = LayoutDesigner::new();
        designer.select(Some(Layout::Linear));
        let controls = designer.controls();
        let min_scale = controls.iter().find(|c| c.title == "Min scale").unwrap();
        assert_eq!(min_scale.kind, ControlKind::Slider(0.6));
        let max_translation = controls
            .iter()
            .find(|c| c.title == "Max translation ratio")
            .unwrap();
        assert_eq!(max_translation.kind, ControlKind::DoubleSlider(Some((2.0, 0.0))));
    }

    #[test]
    fn test_edit_notifies_observers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let code = Rc::new(RefCell::new(String::new()));

        let mut designer = LayoutDesigner::new();
        let seen_cb = seen.clone();
        designer.on_options_change(move |options| seen_cb.borrow_mut().push(options.min_scale()));
        let code_cb = code.clone();
        designer.on_code_preview_change(move |c| *code_cb.borrow_mut() = c.to_string());

        designer.select(Some(Layout::Linear));
        assert!(code.borrow().contains("min_scale_width: 0.6"));
        assert!(seen.borrow().is_empty());

        designer.set("Min scale", ControlValue::Slider(0.3)).unwrap();
        assert_eq!(*seen.borrow(), vec![0.3]);
        assert!(code.borrow().contains("min_scale_height: 0.3"));
        assert_eq!(designer.options().unwrap().min_scale_height, 0.3);
    }

    #[test]
    fn test_edit_does_not_change_preset() {
        let mut designer = LayoutDesigner::new();
        designer.select(Some(Layout::Blur));
        designer
            .set("Blur effect style", ControlValue::Segmented("dark".into()))
            .unwrap();
        assert_eq!(designer.options().unwrap().blur_effect_style, BlurStyle::Dark);
        assert_eq!(ScaleOptions::layout(Layout::Blur).blur_effect_style, BlurStyle::Light);
    }

    #[test]
    fn test_bad_edits() {
        let mut designer = LayoutDesigner::new();
        designer.select(Some(Layout::Rotary));
        assert!(matches!(
            designer.set("Spin", ControlValue::Toggle(true)),
            Err(DesignerError::UnknownControl(_))
        ));
        assert!(matches!(
            designer.set("Max scale", ControlValue::Toggle(true)),
            Err(DesignerError::KindMismatch { got: "toggle", .. })
        ));
        assert!(matches!(
            designer.set("Scale curve", ControlValue::Segmented("wobble".into())),
            Err(DesignerError::Curve(_))
        ));
    }

    #[test]
    fn test_preview_uses_edited_options() {
        let mut designer = LayoutDesigner::new();
        designer.select(Some(Layout::Linear));
        designer.set("Scale ratio", ControlValue::Slider(0.2)).unwrap();
        let t = designer.preview(0.5, Size::new(100.0, 100.0)).unwrap();
        assert!((t.scale.0 - 0.9).abs() < 1e-5);
    }

    #[test]
    fn test_code_preview_default_is_empty() {
        assert_eq!(
            code_preview(&ScaleOptions::default()),
            "ScaleOptions {\n    ..ScaleOptions::default()\n}"
        );
    }

    #[test]
    fn test_code_preview_3d() {
        let code = code_preview(&ScaleOptions::layout(Layout::Rotary));
        assert!(code.contains("rotation_3d: Some(Rotation3dOptions::new("));
        assert!(code.contains("Vec3::new(0.0, 0.0, 1.0), -0.004)"));
        assert!(code.contains("min_translation_ratio: Some(Point::new(-1.0, 0.0))"));
        assert!(!code.contains("shadow_enabled"));
    }
}
