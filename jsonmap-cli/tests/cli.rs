use predicates::prelude::*;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn jsonmap() -> Result<assert_cmd::Command, Box<dyn Error>> {
    Ok(assert_cmd::Command::cargo_bin("jsonmap")?)
}

#[test]
fn list_table_shows_every_entity() -> Result<(), Box<dyn Error>> {
    let output = jsonmap()?
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;
    for slug in [
        "renamed",
        "omitted",
        "ignored",
        "restructured",
        "traversal",
        "aliased",
    ] {
        assert!(stdout.contains(slug), "missing {slug}");
    }
    assert!(stdout.contains("RenamedEntity"));
    Ok(())
}

#[test]
fn list_json_output_parses() -> Result<(), Box<dyn Error>> {
    let output = jsonmap()?
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    let entries = value.as_array().expect("array output");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["slug"], "renamed");
    Ok(())
}

#[test]
fn map_uses_sample_document_by_default() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .args(["map", "renamed"])
        .assert()
        .success()
        .stdout("first_name: Ada\nlast_name: Lovelace\nemail: ada@example.com\n");
    Ok(())
}

#[test]
fn map_reads_input_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = write_file(
        &dir,
        "order.json",
        r#"{"order": {"id": "o-7", "shipping": {"address": {"city": {"name": "Leeds"}}}}}"#,
    )?;

    jsonmap()?
        .args(["map", "traversal", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "order_id: o-7\nshipping\n  city: Leeds\n  country: null\n  region: null\n",
        );
    Ok(())
}

#[test]
fn map_rejects_malformed_input() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = write_file(&dir, "broken.json", "{\"order\": ")?;

    jsonmap()?
        .args(["map", "traversal", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
    Ok(())
}

#[test]
fn map_rejects_unknown_entity() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .args(["map", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown entity"));
    Ok(())
}

#[test]
fn config_limits_input_size() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let config = write_file(&dir, "limits.toml", "max_input_bytes = 16\n")?;
    let input = write_file(&dir, "user.json", r#"{"firstName": "a much longer value"}"#)?;

    jsonmap()?
        .args([
            "--config",
            config.to_str().unwrap(),
            "map",
            "renamed",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 16 bytes"));
    Ok(())
}

#[test]
fn config_limit_rejects_excess_after_complete_document() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let config = write_file(&dir, "limits.toml", "max_input_bytes = 12\n")?;
    let input = write_file(&dir, "user.json", "{\"name\":\"x\"}}}} not json")?;

    jsonmap()?
        .args([
            "--config",
            config.to_str().unwrap(),
            "map",
            "renamed",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 12 bytes"));
    Ok(())
}

#[test]
fn config_rejects_limits_over_hard_maximum() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let config = write_file(&dir, "limits.toml", "max_depth = 100000\n")?;

    jsonmap()?
        .args(["list", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hard maximums"));
    Ok(())
}

#[test]
fn paths_table_shows_alias_display() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .args(["paths", "aliased"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "latitude : results / geometry / location / lat",
        ))
        .stdout(predicate::str::contains("nested"));
    Ok(())
}

#[test]
fn paths_json_lists_segments() -> Result<(), Box<dyn Error>> {
    let output = jsonmap()?
        .args(["paths", "omitted", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    let fields = value.as_array().expect("array output");
    let name = fields
        .iter()
        .find(|field| field["name"] == "name")
        .expect("name field");
    assert_eq!(name["path"], "user/profile/name");
    assert_eq!(name["annotation"], "user/profile/");
    assert_eq!(
        name["segments"],
        serde_json::json!(["user", "profile", "name"])
    );
    Ok(())
}

#[test]
fn path_renames_at_root() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .args(["path", "", "city", "--annotation", "town"])
        .assert()
        .success()
        .stdout("town : town\n");
    Ok(())
}

#[test]
fn path_prefix_under_leaf_base() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .args(["path", "address", "city", "--annotation", "geo/"])
        .assert()
        .success()
        .stdout("address/geo/city : address / geo / city\n");
    Ok(())
}

#[test]
fn docs_prints_markdown() -> Result<(), Box<dyn Error>> {
    jsonmap()?
        .arg("docs")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# jsonmap"))
        .stdout(predicate::str::contains("## Traversing Paths"));
    Ok(())
}
