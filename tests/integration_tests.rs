use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::{json, Value};
use sheetchart::ir::{ChartReadyData, ColorSpec};
use sheetchart::palette::Colorscale;
use sheetchart::{
    build_chart, build_grid, discrete_colors, shape, AnalysisSession, AxisRole, AxisSelection,
    ChartError, ChartFamily, Dataset, Scalar, Theme,
};

/// Helper function to run sheetchart with arguments and stdin input
fn run_sheetchart(args: &[&str], stdin_content: &str) -> Result<String, String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sheetchart"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_content.as_bytes())
            .map_err(|e| format!("Failed to write to stdin: {}", e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for process: {}", e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

fn dataset(value: Value) -> Dataset {
    Dataset::from_json(&value).expect("valid records")
}

fn selection(pairs: &[(AxisRole, &str)]) -> AxisSelection {
    pairs
        .iter()
        .fold(AxisSelection::default(), |sel, (role, col)| sel.with(*role, *col))
}

// =============================================================================
// Library end to end
// =============================================================================

#[test]
fn test_line_chart_stable_sort() {
    let data = dataset(json!([{"x": 1, "y": 10}, {"x": 3, "y": 5}, {"x": 1, "y": 20}]));
    let sel = selection(&[(AxisRole::X, "x"), (AxisRole::Y, "y")]);

    let shaped = shape(&data, &sel, ChartFamily::Line, Theme::Green).unwrap();
    let ChartReadyData::Categorical(c) = shaped else {
        panic!("expected categorical data");
    };
    assert_eq!(c.labels, vec![Scalar::Number(1.0), Scalar::Number(1.0), Scalar::Number(3.0)]);
    assert_eq!(c.data, vec![Scalar::Number(10.0), Scalar::Number(20.0), Scalar::Number(5.0)]);
}

#[test]
fn test_surface_grid_from_sparse_samples() {
    let data = dataset(json!([
        {"x": 1, "y": 1, "z": 5},
        {"x": 2, "y": 1, "z": 6},
        {"x": 1, "y": 2, "z": 7}
    ]));
    let sel = selection(&[(AxisRole::X, "x"), (AxisRole::Y, "y"), (AxisRole::Z, "z")]);

    let grid = build_grid(&data, &sel).unwrap();
    assert_eq!(grid.x_levels, vec![Scalar::Number(1.0), Scalar::Number(2.0)]);
    assert_eq!(grid.y_levels, vec![Scalar::Number(1.0), Scalar::Number(2.0)]);
    assert_eq!(
        grid.grid,
        vec![
            vec![Scalar::Number(5.0), Scalar::Number(6.0)],
            vec![Scalar::Number(7.0), Scalar::Null],
        ]
    );
}

#[test]
fn test_blue_discrete_hues() {
    let hues: Vec<f32> = discrete_colors(Theme::Blue, 3).iter().map(|c| c.h).collect();
    assert_eq!(hues, vec![210.0, 347.0, 124.0]);
}

#[test]
fn test_pie_keeps_duplicate_labels() {
    let data = dataset(json!([
        {"region": "east", "sales": 3},
        {"region": "west", "sales": 4},
        {"region": "east", "sales": 5}
    ]));
    let session = AnalysisSession::new(
        ChartFamily::Pie,
        Theme::Orange,
        selection(&[(AxisRole::Label, "region"), (AxisRole::Y, "sales")]),
    );

    let out = build_chart(&session, &data).unwrap();
    assert_eq!(out.title, "sales by region (Pie Chart)");
    let ChartReadyData::Categorical(c) = out.data else {
        panic!("expected categorical data");
    };
    assert_eq!(c.labels.len(), 3);
    let ColorSpec::Discrete { colors } = c.colors else {
        panic!("expected discrete colors");
    };
    assert_eq!(colors, discrete_colors(Theme::Orange, 3));
}

#[test]
fn test_surface_chart_colorscale() {
    let data = dataset(json!([{"lon": 0, "lat": 0, "depth": 1.5}]));
    let session = AnalysisSession::new(
        ChartFamily::Surface,
        Theme::Red,
        selection(&[(AxisRole::X, "lon"), (AxisRole::Y, "lat"), (AxisRole::Z, "depth")]),
    );

    let out = build_chart(&session, &data).unwrap();
    let ChartReadyData::Grid(g) = out.data else {
        panic!("expected grid data");
    };
    assert_eq!(g.colorscale, Colorscale::Reds);
    assert_eq!(g.surface.cell_count(), 1);
}

#[test]
fn test_missing_axis_and_empty_dataset() {
    let empty = Dataset::default();
    let sel = selection(&[(AxisRole::X, "a")]);
    assert_eq!(
        shape(&empty, &sel, ChartFamily::Bar, Theme::Green),
        Err(ChartError::MissingAxis {
            role: AxisRole::Y,
            column: None
        })
    );

    let sel = sel.with(AxisRole::Y, "b");
    assert_eq!(
        shape(&empty, &sel, ChartFamily::Bar, Theme::Green),
        Err(ChartError::EmptyDataset)
    );
}

#[test]
fn test_session_switch_dimension_then_build() {
    let data = dataset(json!([
        {"a": 1, "b": 2, "c": 3},
        {"a": 0, "b": 5, "c": 1}
    ]));
    let mut session = AnalysisSession::for_headers(&data.headers);
    session.switch_dimension(sheetchart::Dimension::ThreeD);
    assert_eq!(session.family, ChartFamily::Scatter3d);

    let out = build_chart(&session, &data).unwrap();
    let ChartReadyData::Coordinate(c) = out.data else {
        panic!("expected coordinate data");
    };
    assert_eq!(c.points.len(), 2);
    assert_eq!(c.points[0].x, Scalar::Number(0.0));
    assert_eq!(c.points[0].z, Some(Scalar::Number(1.0)));
}

// =============================================================================
// Command line
// =============================================================================

#[test]
fn test_cli_csv_bar_chart() {
    let csv = "month,sales\nFeb,12\nJan,10\n";
    let stdout = run_sheetchart(&["bar(x: month, y: sales) | theme(blue)"], csv)
        .expect("sheetchart failed");
    let out: Value = serde_json::from_str(&stdout).expect("output is JSON");

    assert_eq!(out["family"], "bar");
    assert_eq!(out["title"], "sales vs month (Bar Chart)");
    assert_eq!(out["data"]["labels"], json!(["Feb", "Jan"]));
    assert_eq!(out["data"]["data"], json!([12.0, 10.0]));
    assert_eq!(out["axisTitles"], json!({"x": "month", "y": "sales"}));
}

#[test]
fn test_cli_keeps_word_labels_that_look_non_finite() {
    let csv = "name,score\nNan,3\nInf,5\nBob,4\n";
    let stdout = run_sheetchart(&["pie(label: name, y: score)"], csv).expect("sheetchart failed");
    let out: Value = serde_json::from_str(&stdout).expect("output is JSON");

    assert_eq!(out["data"]["labels"], json!(["Bob", "Inf", "Nan"]));
    assert_eq!(out["data"]["data"], json!([4.0, 5.0, 3.0]));
}

#[test]
fn test_cli_seeded_defaults() {
    let csv = "t,v\n2,20\n1,10\n";
    let stdout = run_sheetchart(&[], csv).expect("sheetchart failed");
    let out: Value = serde_json::from_str(&stdout).expect("output is JSON");

    assert_eq!(out["family"], "line");
    assert_eq!(out["data"]["labels"], json!([1.0, 2.0]));
}

#[test]
fn test_cli_json_input() {
    let records = r#"[{"skill": "rust", "score": 9}, {"skill": "go", "score": 7}]"#;
    let stdout = run_sheetchart(&["--json", "radar(categories: skill, y: score)"], records)
        .expect("sheetchart failed");
    let out: Value = serde_json::from_str(&stdout).expect("output is JSON");

    assert_eq!(out["dimension"], "2D");
    assert_eq!(out["axisTitles"], json!({}));
    assert_eq!(out["data"]["labels"], json!(["go", "rust"]));
    assert_eq!(out["data"]["data"], json!([7.0, 9.0]));
}

#[test]
fn test_cli_missing_column_fails() {
    let csv = "month,sales\nJan,10\n";
    let result = run_sheetchart(&["line(x: month, y: profit)"], csv);
    assert!(result.is_err());
}

#[test]
fn test_cli_parse_error_fails() {
    let result = run_sheetchart(&["line(x: month"], "month\nJan\n");
    assert!(result.is_err());
}

#[test]
fn test_cli_list() {
    let stdout = run_sheetchart(&["--list"], "").expect("sheetchart failed");
    assert_eq!(stdout.lines().count(), 12);
    assert!(stdout.lines().next().unwrap().starts_with("line"));
}
