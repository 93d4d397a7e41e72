// File: crates/chart-render-svg/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to SVG markup.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares text for exact match against the committed snapshot; a missing
//   snapshot fails.

use chart_core::{ChartOptions, ChartPlotter, RawTable};
use chart_render_svg::to_svg;

fn render_svg() -> String {
    let table = RawTable::from_strings([
        vec!["Date", "Close", "Open", "Comment"],
        vec!["2024-01-01", "100", "98", "ok"],
        vec!["2024-01-02", "104", "", ""],
        vec!["2024-01-03", "", "103", ""],
        vec!["2024-01-04", "101", "102", ""],
    ]);
    let mut plotter = ChartPlotter::new(ChartOptions::new(600, 300), table);
    plotter.generate().expect("generate");
    to_svg(&plotter).expect("serialize")
}

#[test]
fn golden_basic_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    let want = std::fs::read_to_string(&snap_path).unwrap_or_else(|e| {
        panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", snap_path.display())
    });
    assert_eq!(svg, want, "rendered markup differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn rendering_is_repeatable() {
    assert_eq!(render_svg(), render_svg());
}
