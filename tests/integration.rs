use std::path::Path;

use basecoat::config::{FileRule, WriteMode};
use basecoat::render::Renderer;
use basecoat::scheme::ColorScheme;
use basecoat::writer;

fn scheme_from_yaml() -> ColorScheme {
    serde_yaml::from_str(
        r#"
scheme: "Test Scheme"
author: "Jane Doe"
base00: "1d2021"
base01: "3c3836"
base08: "fb4934"
"#,
    )
    .unwrap()
}

fn replace_rule(destination: &Path, start: &str, end: &str) -> FileRule {
    FileRule {
        mode: WriteMode::Replace,
        start_marker: start.into(),
        end_marker: end.into(),
        destination: destination.to_string_lossy().into_owned(),
    }
}

#[test]
fn splice_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out.conf");
    std::fs::write(
        &destination,
        "keep-above\n# BEGIN\nold-content\n# END\nkeep-below\n",
    )
    .unwrap();

    let renderer = Renderer::new();
    let variables = scheme_from_yaml().variables();
    let rendered = renderer.render("cfg", "new-content", &variables).unwrap();

    writer::write(
        "cfg",
        &replace_rule(&destination, "# BEGIN", "# END"),
        &rendered,
    )
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&destination).unwrap(),
        "keep-above\n# BEGIN\nnew-content\n# END\nkeep-below\n"
    );
}

#[test]
fn overwrite_pipeline_renders_scheme_variables() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("colors.conf");

    let template = "\
background #{{base00-hex}}
foreground-red {{base08-rgb-r}}
name \"{{scheme-name}}\"
";

    let renderer = Renderer::new();
    let variables = scheme_from_yaml().variables();
    let rendered = renderer.render("cfg", template, &variables).unwrap();

    let rule = FileRule {
        destination: destination.to_string_lossy().into_owned(),
        ..FileRule::default()
    };
    writer::write("cfg", &rule, &rendered).unwrap();

    assert_eq!(
        std::fs::read_to_string(&destination).unwrap(),
        "background #1d2021\nforeground-red 251\nname \"Test Scheme\"\n"
    );
}

#[test]
fn rerunning_the_pipeline_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("app.conf");
    std::fs::write(&destination, "a\n# BEGIN\nstale\n# END\nz\n").unwrap();

    let renderer = Renderer::new();
    let variables = scheme_from_yaml().variables();
    let rule = replace_rule(&destination, "# BEGIN", "# END");

    for _ in 0..2 {
        let rendered = renderer
            .render("cfg", "color #{{base01-hex}}", &variables)
            .unwrap();
        writer::write("cfg", &rule, &rendered).unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(&destination).unwrap(),
        "a\n# BEGIN\ncolor #3c3836\n# END\nz\n"
    );
}

#[test]
fn missing_end_marker_keeps_a_usable_file() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("app.conf");
    std::fs::write(&destination, "keep\n# BEGIN\nstale-1\nstale-2\n").unwrap();

    writer::write(
        "cfg",
        &replace_rule(&destination, "# BEGIN", "# END"),
        "fresh",
    )
    .unwrap();

    let content = std::fs::read_to_string(&destination).unwrap();
    assert!(!content.is_empty());
    assert!(content.starts_with("keep\n# BEGIN\nfresh\n"));
}

#[test]
fn unknown_scheme_variables_render_empty_in_place() {
    let renderer = Renderer::new();
    let variables = scheme_from_yaml().variables();
    let rendered = renderer
        .render("cfg", "set [{{base0G-hex}}] done", &variables)
        .unwrap();
    assert_eq!(rendered, "set [] done");
}
