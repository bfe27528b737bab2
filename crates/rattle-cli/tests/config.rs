use anyhow::Result;
use predicates::prelude::*;
use rattle_testing::{TestWorld, assertions, sample_pipeline};

#[test]
fn test_config_show_defaults() -> Result<()> {
    let world = TestWorld::new();

    let (result, json) = world.run_json(&["config", "show"])?;

    assert!(result.success());
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["page_size"], 8);
    assert_eq!(json["content"]["at_risk_threshold"], 40);
    assert_eq!(json["content"]["deals_source"], "demo");
    assert_eq!(json["suggestions"][0]["command"], "rattle config init");

    Ok(())
}

#[test]
fn test_config_init_writes_defaults_once() -> Result<()> {
    let world = TestWorld::new();
    let config_path = world.data_dir().join("config.toml");

    let result = world.run(&["config", "init"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Config created"));
    assert!(config_path.exists());

    let written = std::fs::read_to_string(&config_path)?;
    assert!(predicate::str::contains("page_size = 8").eval(&written));
    assert!(predicate::str::contains("at_risk_threshold = 40").eval(&written));

    std::fs::write(&config_path, "[list]\npage_size = 5\n")?;
    let result = world.run(&["config", "init"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Config already exists"));
    assert_eq!(std::fs::read_to_string(&config_path)?, "[list]\npage_size = 5\n");

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success());
    assert!(std::fs::read_to_string(&config_path)?.contains("page_size = 8"));

    Ok(())
}

#[test]
fn test_configured_page_size_applies_to_list() -> Result<()> {
    let world = TestWorld::new()
        .with_deals(&sample_pipeline())?
        .with_config("[list]\npage_size = 3\n")?;

    let (_, json) = world.run_json(&["deals", "list"])?;

    assertions::assert_deal_ids(&json, &["1", "2", "3"])?;
    assert_eq!(json["content"]["pagination"]["total_pages"], 4);

    Ok(())
}

#[test]
fn test_config_deals_path_is_workspace_relative() -> Result<()> {
    let world = TestWorld::new();
    rattle_testing::fixtures::write_deals_file(
        &world.data_dir().join("pipeline.json"),
        &sample_pipeline(),
    )?;
    let world = world.with_config("[data]\ndeals_path = \"pipeline.json\"\n")?;

    let (result, json) = world.run_json(&["deals", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_summary_count(&json, 10)?;

    let (_, json) = world.run_json(&["config", "show"])?;
    let source = json["content"]["deals_source"].as_str().unwrap_or_default();
    assert!(source.ends_with("pipeline.json"), "{}", source);

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let world = TestWorld::new().with_config("[list]\npage_size = 0\n")?;

    let result = world.run(&["deals", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
    assert!(result.stderr().contains("page_size"));

    Ok(())
}

#[test]
fn test_rattle_path_env_selects_workspace() -> Result<()> {
    let world = TestWorld::new();
    let workspace = world.temp_dir().join("from-env");

    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("rattle")?;
    cmd.env("RATTLE_PATH", &workspace)
        .args(["config", "init"])
        .assert()
        .success();

    assert!(workspace.join("config.toml").exists());

    Ok(())
}
