// tests/figure_output_test.rs

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use smartplot::{add_plot, show, AddPlotOptions, Figure, ShowOptions};

fn write_fixture(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("data.csv");
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn fitted_figure(dir: &tempfile::TempDir) -> Figure {
    let input = write_fixture(dir, "0,1\n1,3\n2,5\n3,7\n");
    let mut figure = Figure::new();
    figure.set_axis_labels(Some("U, V"), Some("I, mA"));
    let options = AddPlotOptions {
        input,
        draw_label: true,
        units: "mA/V".to_string(),
        ..AddPlotOptions::default()
    };
    add_plot(&mut figure, &options).unwrap();
    figure
}

#[test]
fn show_without_save_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let figure = fitted_figure(&dir);

    let output = dir.path().join("graph.png");
    let options = ShowOptions {
        output: output.clone(),
        save: false,
        ..ShowOptions::default()
    };
    show(&figure, &options).unwrap();
    assert!(!output.exists());
}

#[test]
fn show_with_save_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let figure = fitted_figure(&dir);

    let output = dir.path().join("graph.png");
    let options = ShowOptions {
        output: output.clone(),
        dpi: 40,
        save: true,
    };
    show(&figure, &options).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(!bytes.is_empty());
    // PNG signature
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn empty_figure_still_renders() {
    let figure = Figure::new();
    show(&figure, &ShowOptions::default()).unwrap();
}

#[test]
fn cleared_figure_is_like_new() {
    let dir = tempfile::tempdir().unwrap();
    let mut figure = fitted_figure(&dir);
    assert!(!figure.items.is_empty());

    figure.clear();
    assert!(figure.items.is_empty());
    assert!(figure.x_label.is_none());
    assert!(figure.y_label.is_none());
    assert_eq!(figure.series_count(), 0);

    // The reset figure accepts a fresh, unrelated batch from cursor 0.
    let input = write_fixture(&dir, "1,2\n2,4\n3,6\n");
    let options = AddPlotOptions {
        input,
        ..AddPlotOptions::default()
    };
    add_plot(&mut figure, &options).unwrap();
    assert_eq!(figure.series_count(), 1);
}

// tests/figure_output_test.rs
