use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tsuml(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tsuml").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_project(dir: &Path) {
    write(
        dir,
        "src/types/game.ts",
        "export interface Game {\n  id: string;\n}\n\nexport interface CartItem extends Game {\n  quantity: number;\n}\n",
    );
    write(
        dir,
        "src/contexts/CartContext.tsx",
        "import React from 'react';\nimport { Game } from '../types/game';\n\ninterface CartContextType {\n  items: Game[];\n}\n",
    );
    write(dir, "src/index.css", "body { margin: 0; }\n");
}

#[test]
fn test_analyze_writes_dot_graph() {
    let dir = TempDir::new().unwrap();
    sample_project(dir.path());
    let output = dir.path().join("graph.dot");

    tsuml(dir.path())
        .args(["analyze", "src", "-o", "graph.dot", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency graph written"));

    let dot = fs::read_to_string(output).unwrap();
    assert!(dot.contains("graph [rankdir=TB size=\"12,12\"]"));
    assert!(dot.contains("\"Game\" [label=\"Game\\ntypes/game.ts\" shape=box]"));
    assert!(dot.contains("\"CartContextType\" [label=\"CartContextType\\ncontexts/CartContext.tsx\" shape=box]"));
    assert!(dot.contains("\"React\" -> \"react\" [style=dashed]"));
    assert!(dot.contains("\"Game\" -> \"../types/game\" [style=dashed]"));
}

#[test]
fn test_analyze_empty_tree_still_renders() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    tsuml(dir.path())
        .args(["analyze", "empty", "-o", "empty.dot", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No classes, interfaces or imports found"));

    let dot = fs::read_to_string(dir.path().join("empty.dot")).unwrap();
    assert!(dot.contains("digraph {"));
    assert!(!dot.contains("->"));
    assert!(!dot.contains("label="));
}

#[test]
fn test_analyze_report_and_duplicates() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a/Props.tsx", "interface Props {}\n");
    write(dir.path(), "src/b/Props.tsx", "interface Props {}\n");

    tsuml(dir.path())
        .args([
            "analyze", "src", "-o", "graph.dot", "--format", "dot", "--report", "report.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("declared in more than one file"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["project"]["files_scanned"], 2);
    assert_eq!(report["project"]["node_count"], 1);
    assert_eq!(report["duplicates"][0]["path"], "b/Props.tsx");

    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert!(dot.contains("Props\\nb/Props.tsx"));
    assert!(!dot.contains("Props\\na/Props.tsx"));
}

#[test]
fn test_analyze_missing_report_dir_writes_nothing() {
    let dir = TempDir::new().unwrap();
    sample_project(dir.path());

    tsuml(dir.path())
        .args([
            "analyze", "src", "-o", "graph.dot", "--format", "dot", "--report", "missing/r.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory does not exist"));

    assert!(!dir.path().join("graph.dot").exists());
}

#[test]
fn test_analyze_same_file_redeclaration_is_not_a_duplicate() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/props.ts",
        "interface Props { a: string }\ninterface Props { b: number }\n",
    );

    tsuml(dir.path())
        .args(["analyze", "src", "-o", "graph.dot", "--format", "dot", "--report", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("more than one file").not());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["project"]["duplicate_count"], 0);
    assert_eq!(report["project"]["node_count"], 1);
}

#[test]
fn test_analyze_qualified_keeps_both() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a/Props.tsx", "interface Props {}\n");
    write(dir.path(), "src/b/Props.tsx", "interface Props {}\n");

    tsuml(dir.path())
        .args(["analyze", "src", "-o", "graph.dot", "--format", "dot", "--qualified"])
        .assert()
        .success();

    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert!(dot.contains("\"a/Props.tsx::Props\""));
    assert!(dot.contains("\"b/Props.tsx::Props\""));
}

#[test]
fn test_analyze_missing_root_fails() {
    let dir = TempDir::new().unwrap();

    tsuml(dir.path())
        .args(["analyze", "nope", "-o", "graph.dot", "--format", "dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan"));

    assert!(!dir.path().join("graph.dot").exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = TempDir::new().unwrap();

    tsuml(dir.path())
        .args(["uml", "-o", "missing/uml.dot", "--format", "dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory does not exist"));
}

#[test]
fn test_uml_writes_four_classes() {
    let dir = TempDir::new().unwrap();

    tsuml(dir.path())
        .args(["uml", "-o", "uml.dot", "--format", "dot"])
        .assert()
        .success();

    let dot = fs::read_to_string(dir.path().join("uml.dot")).unwrap();
    for id in ["Uzivatel", "System", "Zaznam", "Opravneni"] {
        assert!(dot.contains(&format!("\t\"{}\" [label=", id)), "{}", id);
    }
    assert_eq!(dot.matches(" -> ").count(), 4);
    assert!(dot.contains("[label=\"řídí\"]"));
}

#[test]
fn test_config_file_selects_missing_engine() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tsuml.toml",
        "[render]\nlayout_engine = \"/nonexistent/graphviz/dot\"\nformat = \"png\"\n",
    );

    tsuml(dir.path())
        .args(["uml", "-o", "uml.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not available"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "custom.toml", "[graph]\nnode_identity = 3\n");

    tsuml(dir.path())
        .args(["--config", "custom.toml", "uml", "-o", "uml.dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_sketch_writes_png() {
    let dir = TempDir::new().unwrap();

    tsuml(dir.path())
        .args(["sketch", "-o", "sketch.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UML sketch written"))
        .stderr(predicate::str::is_empty());

    let bytes = fs::read(dir.path().join("sketch.png")).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_quiet_suppresses_output() {
    let dir = TempDir::new().unwrap();

    tsuml(dir.path())
        .args(["-q", "uml", "-o", "uml.dot", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
