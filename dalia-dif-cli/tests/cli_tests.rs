use std::path::Path;
use std::process::{Command, Output};
use std::sync::Once;
use tempfile::TempDir;
use tracing::{error, info};

static INIT: Once = Once::new();

/// Initialize logging exactly once for all tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    });
}

fn dalia_dif(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_dalia-dif"))
        .args(args)
        .output()
        .expect("failed to run dalia-dif");

    if !output.status.success() {
        error!("Command failed with status: {}", output.status);
        error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        error!("stdout: {}", String::from_utf8_lossy(&output.stdout));
    } else {
        info!("stdout: {}", String::from_utf8_lossy(&output.stdout));
    }
    output
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("non UTF-8 temp path")
}

#[test]
fn test_convert_with_config() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("dif.ttl");

    let output = dalia_dif(&[
        "convert",
        "--config",
        "../test-data/config.jsonc",
        "--output",
        path_arg(&output_path),
    ]);
    assert!(output.status.success());

    let turtle = std::fs::read_to_string(&output_path)?;
    assert!(turtle.contains("@prefix schema: <https://schema.org/>"));
    assert!(turtle.contains("b3763080-15a4-4de4-b99b-c9b337644904"));
    assert!(turtle.contains("0f8a3c1e-6b2d-4e5f-9a7b-1c2d3e4f5a6b"));
    Ok(())
}

#[test]
fn test_convert_input_to_ntriples() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("dif.nt");

    let output = dalia_dif(&[
        "--verbose",
        "convert",
        "--input",
        "../test-data/dif.csv",
        "--format",
        "ntriples",
        "--output",
        path_arg(&output_path),
    ]);
    assert!(output.status.success());

    let ntriples = std::fs::read_to_string(&output_path)?;
    assert!(ntriples.lines().all(|line| line.is_empty() || line.ends_with(" .")));
    assert!(ntriples.contains(
        "<https://id.dalia.education/learning-resource/b3763080-15a4-4de4-b99b-c9b337644904> \
         <http://purl.org/dc/terms/license> <http://spdx.org/licenses/CC-BY-4.0> ."
    ));
    Ok(())
}

#[test]
fn test_convert_fails_on_invalid_row() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("broken.csv");
    let dif = std::fs::read_to_string("../test-data/dif.csv")?
        .replace("CC-BY-4.0", "Not a license");
    std::fs::write(&input, dif)?;

    let output = dalia_dif(&["convert", "--input", path_arg(&input)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[broken.csv line:2] License"));

    let output = dalia_dif(&["convert", "--input", path_arg(&input), "--keep-going"]);
    assert!(output.status.success());
    assert!(temp_dir.path().join("broken.ttl").is_file());
    Ok(())
}

#[test]
fn test_convert_with_n4c_links() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("n4c.csv");
    let dif = std::fs::read_to_string("../test-data/dif.csv")?
        .replace(",Notes", ",N4C_ID")
        .replace(",reviewed", ",https://nfdi4culture.de/id/E5678");
    std::fs::write(&input, dif)?;

    let output = dalia_dif(&["convert", "--input", path_arg(&input), "--format", "nt"]);
    assert!(output.status.success());
    let ntriples = std::fs::read_to_string(temp_dir.path().join("n4c.nt"))?;
    assert!(!ntriples.contains("nfdi4culture.de/id/E5678"));

    let output = dalia_dif(&[
        "convert",
        "--input",
        path_arg(&input),
        "--format",
        "nt",
        "--n4c-links",
    ]);
    assert!(output.status.success());
    let ntriples = std::fs::read_to_string(temp_dir.path().join("n4c.nt"))?;
    assert!(ntriples.contains(
        "<https://id.dalia.education/learning-resource/0f8a3c1e-6b2d-4e5f-9a7b-1c2d3e4f5a6b> \
         <https://schema.org/url> <https://nfdi4culture.de/id/E5678> ."
    ));
    Ok(())
}

#[test]
fn test_generate_and_validate_config() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let temp_dir = TempDir::new()?;
    let output = dalia_dif(&["generate-config", "--output", path_arg(temp_dir.path())]);
    assert!(output.status.success());

    let config_path = temp_dir.path().join("dalia-dif.jsonc");
    assert!(config_path.is_file());

    // The template points to a dif.csv next to it
    let output = dalia_dif(&["validate", "--config", path_arg(&config_path)]);
    assert!(!output.status.success());

    std::fs::copy("../test-data/dif.csv", temp_dir.path().join("dif.csv"))?;
    let output = dalia_dif(&["validate", "--config", path_arg(&config_path)]);
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_missing_config() {
    init_logging();

    let output = dalia_dif(&["validate", "--config", "does-not-exist.jsonc"]);
    assert!(!output.status.success());
}
