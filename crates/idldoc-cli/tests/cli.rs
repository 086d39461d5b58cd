//! Command-line behaviour of the `idldoc` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn idldoc(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_idldoc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("AMENT_PREFIX_PATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run idldoc")
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A source tree with one package holding a message, a service and a broken message
fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("src/demo_msgs");
    write(
        &pkg.join("package.xml"),
        "<package format=\"3\"><name>demo_msgs</name><version>0.1.0</version></package>",
    );
    write(&pkg.join("msg/Point.msg"), "float64 x\nfloat64 y\n");
    write(&pkg.join("msg/Broken.msg"), "int32 NotSnake\n");
    write(&pkg.join("srv/Reset.srv"), "bool hard false\n---\nbool ok\n");
    tmp
}

#[test]
fn generate_writes_html_tree() {
    let tmp = workspace();
    let output = idldoc(tmp.path(), &["generate", "--source-root", "src", "--outputdir", "out"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let html = tmp.path().join("out/html");
    assert!(html.join("index.html").is_file());
    assert!(html.join("styles.css").is_file());
    assert!(html.join("demo_msgs/msg/Point.html").is_file());
    assert!(html.join("demo_msgs/srv/Reset.html").is_file());
    assert!(!html.join("demo_msgs/msg/Broken.html").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Documented 2 interfaces from 1 package in"));
    assert!(stdout.contains("(1 skipped)"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("demo_msgs/msg/Broken"));
}

#[test]
fn config_file_supplies_defaults() {
    let tmp = workspace();
    write(
        &tmp.path().join("idldoc.toml"),
        "output_dir = \"docs\"\nsource_roots = [\"src\"]\n",
    );
    let output = idldoc(tmp.path(), &["generate"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(tmp.path().join("docs/html/demo_msgs/index.html").is_file());
}

#[test]
fn list_prints_catalog() {
    let tmp = workspace();
    let output = idldoc(tmp.path(), &["list", "--source-root", "src"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("demo_msgs:"));
    assert!(stdout.contains("  msg/Point"));
    assert!(stdout.contains("  srv/Reset"));
}

#[test]
fn show_json() {
    let tmp = workspace();
    let output = idldoc(
        tmp.path(),
        &["show", "demo_msgs/srv/Reset", "--json", "--source-root", "src"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"kind\": \"service\""));
    assert!(stdout.contains("\"=false\""));
}

#[test]
fn show_rejects_malformed_name() {
    let tmp = workspace();
    let output = idldoc(tmp.path(), &["show", "demo_msgs/Point", "--source-root", "src"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed interface identifier"));
}

#[test]
fn no_sources_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let output = idldoc(tmp.path(), &["list"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No interface sources"));
}
