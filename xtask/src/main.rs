use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: cargo xtask <readme|check-readme>";

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), String> {
    let task = env::args().nth(1).ok_or_else(|| USAGE.to_string())?;
    match task.as_str() {
        "readme" => write_readme(),
        "check-readme" => check_readme(),
        other => Err(format!("unknown task '{other}'\n{USAGE}")),
    }
}

fn render_readme() -> Result<String, String> {
    jsonmap_demo::readme().map_err(|e| format!("rendering README failed: {e}"))
}

fn write_readme() -> Result<(), String> {
    let path = repo_root()?.join("README.md");
    let readme = render_readme()?;
    fs::write(&path, readme).map_err(|e| format!("writing {} failed: {e}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn check_readme() -> Result<(), String> {
    let path = repo_root()?.join("README.md");
    let expected = render_readme()?;
    let current = fs::read_to_string(&path)
        .map_err(|e| format!("reading {} failed: {e}", path.display()))?;

    if current == expected {
        println!("README OK");
        return Ok(());
    }

    let first_difference = current
        .lines()
        .zip(expected.lines())
        .position(|(have, want)| have != want)
        .unwrap_or_else(|| current.lines().count().min(expected.lines().count()));

    Err(format!(
        "{} is out of date (first difference at line {}). Run `cargo xtask readme`.",
        path.display(),
        first_difference + 1
    ))
}

fn repo_root() -> Result<PathBuf, String> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| "xtask manifest directory has no parent".to_string())
}
