//! Load failures surface as `Error: ...` on stderr with exit code 1.

use anyhow::Result;
use rattle_testing::{DealBuilder, TestWorld};

#[test]
fn test_malformed_deals_file() -> Result<()> {
    let world = TestWorld::new().with_raw_deals("[{\"id\": \"1\",")?;

    let result = world.run(&["deals", "list"])?;

    assert!(!result.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Error: Deal data parse error"));

    Ok(())
}

#[test]
fn test_unknown_stage_token() -> Result<()> {
    let world = TestWorld::new().with_raw_deals(
        r#"[{"id": "1", "name": "X", "company": "Y", "stage": "won-ish", "owner": "Z"}]"#,
    )?;

    let result = world.run(&["deals", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("won-ish"));

    Ok(())
}

#[test]
fn test_duplicate_ids() -> Result<()> {
    let world = TestWorld::new().with_deals(&[
        DealBuilder::new("1").build(),
        DealBuilder::new("1").company("Globex").build(),
    ])?;

    let result = world.run(&["deals", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("duplicate deal id '1'"));

    Ok(())
}

#[test]
fn test_missing_deals_file() -> Result<()> {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nowhere.json");

    let result = world.run(&["--deals", missing.to_str().unwrap_or_default(), "deals", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("IO error"));
    assert!(result.stderr().contains("nowhere.json"));

    Ok(())
}

#[test]
fn test_missing_values_default_to_zero() -> Result<()> {
    let world = TestWorld::new().with_raw_deals(
        r#"[{"id": "1", "name": "X", "company": "Y", "stage": "proposal", "owner": "Z"}]"#,
    )?;

    let (result, json) = world.run_json(&["deals", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(json["content"]["summary"]["total_value"], 0);
    assert_eq!(json["content"]["summary"]["avg_probability"], 0.0);

    Ok(())
}
