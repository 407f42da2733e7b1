use nplot::cli_main::OutFormat;
use nplot::profile::{normalize, LengthProfile};
use nplot::visualize::plot::{render, PlotConfig};

fn config(log_scale: bool) -> PlotConfig {
    PlotConfig {
        title: "N-Statistics".to_string(),
        xlabel: "Cumulative length proportional to genome length".to_string(),
        log_scale,
        n50_line: true,
        dpi: 300,
    }
}

#[test]
fn renders_svg_comparison_chart() {
    let mut profiles = vec![
        LengthProfile::new("even", vec![10, 10, 10, 10, 10], false),
        LengthProfile::new("skewed", vec![5, 15, 30], false),
    ];
    normalize(&mut profiles, Some(50.0)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("curves");
    let written = render(&profiles, &config(true), &base, OutFormat::Svg).unwrap();

    assert_eq!(written, vec![dir.path().join("curves.svg")]);
    let svg = std::fs::read_to_string(&written[0]).unwrap();
    assert!(svg.contains("<svg"));
    // Legend carries both profile names.
    assert!(svg.contains("even"));
    assert!(svg.contains("skewed"));
}

#[test]
fn linear_scale_renders_too() {
    let mut profiles = vec![LengthProfile::new("one", vec![400, 250, 130, 90], false)];
    normalize(&mut profiles, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("linear");
    let written = render(&profiles, &config(false), &base, OutFormat::Svg).unwrap();
    assert!(std::fs::metadata(&written[0]).unwrap().len() > 0);
}

#[test]
fn basename_dots_are_preserved() {
    let mut profiles = vec![LengthProfile::new("one", vec![10, 10], false)];
    normalize(&mut profiles, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("asm.v2");
    let written = render(&profiles, &config(true), &base, OutFormat::Svg).unwrap();
    assert_eq!(written, vec![dir.path().join("asm.v2.svg")]);
}
