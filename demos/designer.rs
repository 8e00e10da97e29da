//! Drive the layout designer from the command line.
//!
//! Usage: `designer <layout> [<control title>=<value> ...]`
//!
//! Values are parsed by the control's kind: `0.4` for sliders, `0.4,0.1` for
//! double sliders, `true`/`false` for toggles, and a name for segmented
//! controls.

use std::env;
use std::process::ExitCode;

use paging_transform::prelude::*;

fn parse_value(kind: &ControlKind, raw: &str) -> Option<ControlValue> {
    match kind {
        ControlKind::Slider(_) => raw.parse().ok().map(ControlValue::Slider),
        ControlKind::DoubleSlider(_) => {
            let (x, y) = raw.split_once(',')?;
            Some(ControlValue::DoubleSlider(x.trim().parse().ok()?, y.trim().parse().ok()?))
        }
        ControlKind::Toggle(_) => raw.parse().ok().map(ControlValue::Toggle),
        ControlKind::Segmented { .. } => Some(ControlValue::Segmented(raw.to_string())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(name) = args.next() else {
        eprintln!("usage: designer <layout> [<control>=<value> ...]");
        return ExitCode::FAILURE;
    };
    let layout: Layout = match name.parse() {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut designer = LayoutDesigner::new();
    designer.on_code_preview_change(|code| println!("{code}\n"));
    designer.select(Some(layout));

    for edit in args {
        let Some((title, raw)) = edit.split_once('=') else {
            eprintln!("expected <control>=<value>, got `{edit}`");
            return ExitCode::FAILURE;
        };
        let controls = designer.controls();
        let Some(control) = controls.iter().find(|c| c.title == title) else {
            eprintln!("unknown control `{title}`");
            return ExitCode::FAILURE;
        };
        let Some(value) = parse_value(&control.kind, raw) else {
            eprintln!("cannot parse `{raw}` for `{title}`");
            return ExitCode::FAILURE;
        };
        if let Err(err) = designer.set(title, value) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    if let Some(t) = designer.preview(0.5, Size::new(240.0, 320.0)) {
        println!("at progress 0.5: scale {:?}, translation {:?}", t.scale, t.translation);
    }
    ExitCode::SUCCESS
}
