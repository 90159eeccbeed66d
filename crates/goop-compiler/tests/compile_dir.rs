use std::fs;
use std::path::PathBuf;

use goop_compiler::{Compiler, CompilerConfig, CompilerError, FailureKind};
use tempfile::TempDir;

const SHAPE: &str = "\
package shapes

class Rect {
\tWidth, Height float64
\tfunc Rect(w, h float64) {
\t\tthis.Width = w
\t\tthis.Height = h
\t}
\tfunc Area() float64 {
\t\treturn this.Width * this.Height
\t}
}
";

const MAIN: &str = "\
package main

func main() {
\tvar s @Shape = new Rect(2, 3) // two by three
\tfmt.Println(s.Area())
}
";

fn config(root: PathBuf) -> CompilerConfig {
    CompilerConfig {
        root_dir: root,
        ..CompilerConfig::default()
    }
}

#[test]
fn compiles_every_goop_file_under_root() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("shapes")).unwrap();
    fs::write(dir.path().join("shapes/rect.goo"), SHAPE).unwrap();
    fs::write(dir.path().join("main.GOO"), MAIN).unwrap();

    let compiler = Compiler::new(config(dir.path().to_path_buf())).unwrap();
    let result = compiler.compile().unwrap();

    assert_eq!(result.matched(), 2);
    assert!(result.failures.is_empty());
    assert_eq!(result.classes(), 1);

    let rect = fs::read_to_string(dir.path().join("shapes/rect.go")).unwrap();
    assert!(rect.starts_with("package shapes\n\ntype Rect struct {\n\tWidth float64\n\tHeight float64\n}\n"));
    assert!(rect.contains("type Interface__Rect interface {\n\tArea() float64\n\tWidth() float64\n\tSetWidth(Width float64)\n\tHeight() float64\n\tSetHeight(Height float64)\n}"));
    assert!(rect.contains("func New__Rect(w, h float64) *Rect {\n\tthis := &Rect{}\n\tthis.Rect(w, h)\n\treturn this\n}"));
    assert!(rect.contains("func (this *Rect) Area() float64 {\n\treturn this.Width * this.Height\n}"));

    let main = fs::read_to_string(dir.path().join("main.GO")).unwrap();
    assert!(main.contains("\tvar s Interface__Shape = New__Rect(2, 3) \n"));
    assert!(!main.contains("two by three"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rect.goo"), SHAPE).unwrap();

    let compiler = Compiler::new(CompilerConfig {
        write_output: false,
        ..config(dir.path().to_path_buf())
    })
    .unwrap();
    let result = compiler.compile().unwrap();

    assert_eq!(result.files.len(), 1);
    assert!(!result.files[0].written);
    assert_eq!(result.files[0].output, dir.path().join("rect.go"));
    assert!(!dir.path().join("rect.go").exists());
}

#[test]
fn failures_do_not_stop_the_walk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.goo"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("blocked.goo"), SHAPE).unwrap();
    fs::create_dir_all(dir.path().join("blocked.go")).unwrap();
    fs::write(dir.path().join("good.goo"), SHAPE).unwrap();

    let compiler = Compiler::new(config(dir.path().to_path_buf())).unwrap();
    let result = compiler.compile().unwrap();

    assert_eq!(result.matched(), 3);
    assert_eq!(result.files.len(), 1);
    assert!(dir.path().join("good.go").exists());

    let read = result.failures.iter().find(|f| f.kind == FailureKind::Read).unwrap();
    assert_eq!(read.path, dir.path().join("bad.goo"));
    assert!(read.message.starts_with("Could not open Goop file:"));

    let write = result.failures.iter().find(|f| f.kind == FailureKind::Write).unwrap();
    assert_eq!(write.path, dir.path().join("blocked.go"));
    assert!(write.message.starts_with("Could not write Go file:"));
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let compiler = Compiler::new(config(dir.path().join("nope"))).unwrap();

    let err = compiler.compile().unwrap_err();
    assert!(matches!(err, CompilerError::RootNotFound { .. }));
}

#[test]
fn transpile_file_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.go");
    fs::write(&path, "package main\n").unwrap();

    let compiler = Compiler::new(CompilerConfig::default()).unwrap();
    let err = compiler.transpile_file(&path).unwrap_err();
    assert!(matches!(err, CompilerError::NotGoopFile { .. }));
}

#[test]
fn report_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rect.goo"), SHAPE).unwrap();

    let compiler = Compiler::new(config(dir.path().to_path_buf())).unwrap();
    let result = compiler.compile().unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(json["files"][0]["classes"][0]["name"], "Rect");
    assert_eq!(json["files"][0]["classes"][0]["fields"], 2);
    assert_eq!(json["files"][0]["classes"][0]["accessors"], 4);
    assert_eq!(json["files"][0]["written"], true);
    assert_eq!(json["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn custom_marker() {
    let compiler = Compiler::new(CompilerConfig {
        marker: '$',
        ..CompilerConfig::default()
    })
    .unwrap();

    let out = compiler.transpile_source("var cache map[string]$\nvar s $Shape = new Rect(1, 2)\n");
    assert_eq!(
        out.code,
        "var cache map[string]interface{}\nvar s Interface__Shape = New__Rect(1, 2)\n"
    );
}
