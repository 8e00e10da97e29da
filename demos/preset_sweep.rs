//! Print the transform of every preset across a scroll of one page each way.
//!
//! Run with `RUST_LOG=trace` to see the engine's own per-call logging.

use paging_transform::prelude::*;

fn main() {
    env_logger::init();

    let size = Size::new(240.0, 320.0);
    for layout in Layout::ALL {
        let options = layout.options();
        println!("{layout}");
        for step in -4..=4 {
            let progress = step as f32 / 4.0;
            let t = ScaleTransform::compute(progress, &options, size);
            println!(
                "  {:>5.2}  scale ({:.3}, {:.3})  translate ({:>8.2}, {:>8.2})  3d {:<5}  shadow {:<5}  blur {}",
                progress,
                t.scale.0,
                t.scale.1,
                t.translation.0,
                t.translation.1,
                t.transform_3d.is_some(),
                t.shadow.is_some(),
                t.blur.map(|b| format!("{:.3}", b.radius)).unwrap_or_else(|| "-".into()),
            );
        }
    }
}
