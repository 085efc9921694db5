// Common test utilities
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn record_yaml(name: &str, before_code: &str) -> String {
    format!(
        r#"- name: {name}
  rationale: A class does the work of two.
  beforeCode: "{before_code}"
  afterCode: "class A {{ B b; }}; class B {{}};"
  benefits:
    - Reduces size
"#
    )
}

pub fn extract_class_yaml() -> String {
    record_yaml("Extract Class", "class A { int x; int y; };")
}

pub fn write_source(dir: &Path, file_name: &str, content: &str) {
    fs::write(dir.join(file_name), content).unwrap();
}

/// Temp directory holding a two-file cookbook plus a file the loader must skip
pub fn setup_cookbook_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    write_source(
        temp_dir.path(),
        "b_second.yaml",
        &record_yaml("Inline Class", "class A {};"),
    );
    write_source(temp_dir.path(), "a_first.yml", &extract_class_yaml());
    write_source(temp_dir.path(), "README.md", "# not a cookbook source\n");

    temp_dir
}

/// Every `<table>` block must be free of blank lines, otherwise Markdown
/// ends the HTML block early and renders the rest as text.
pub fn assert_tables_have_no_blank_lines(document: &str) {
    let mut rest = document;
    while let Some(start) = rest.find("<table>") {
        let end = rest[start..]
            .find("</table>")
            .map(|i| start + i)
            .expect("unterminated <table>");
        let table = &rest[start..end];
        assert!(
            !table.lines().any(|line| line.trim().is_empty()),
            "blank line inside table:\n{table}"
        );
        rest = &rest[end..];
    }
}
