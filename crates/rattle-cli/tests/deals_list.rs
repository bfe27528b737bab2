//! Deal List Tests
//!
//! Verifies that `deals list` filters, sorts, pages and summarizes
//! through the CLI the same way the engine does.

use anyhow::Result;
use rattle_testing::{TestWorld, assertions, sample_pipeline};

fn world() -> Result<TestWorld> {
    TestWorld::new().with_deals(&sample_pipeline())
}

#[test]
fn test_default_list_shows_first_page() -> Result<()> {
    let world = world()?;

    let (result, json) = world.run_json(&["deals", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_deal_ids(&json, &["1", "2", "3", "4", "5", "6", "7", "8"])?;
    assertions::assert_summary_count(&json, 10)?;
    assert_eq!(json["content"]["pagination"]["total_pages"], 2);
    assert_eq!(json["content"]["summary"]["total_value"], 675_000);
    assert_eq!(json["badge"]["label"], "10 deals found");

    Ok(())
}

#[test]
fn test_second_page_and_clamping() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--page", "2"])?;
    assertions::assert_deal_ids(&json, &["9", "10"])?;
    assert_eq!(json["content"]["pagination"]["start"], 9);
    assert_eq!(json["content"]["pagination"]["end"], 10);

    // Past the end lands on the last page
    let (result, json) = world.run_json(&["deals", "list", "--page", "99"])?;
    assert!(result.success());
    assertions::assert_deal_ids(&json, &["9", "10"])?;
    assert_eq!(json["content"]["pagination"]["page"], 2);

    Ok(())
}

#[test]
fn test_search_is_case_insensitive() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--search", "ACME"])?;

    assertions::assert_deal_ids(&json, &["1", "4", "10"])?;
    assertions::assert_summary_count(&json, 3)?;

    Ok(())
}

#[test]
fn test_owner_filter() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--owner", "Sarah Johnson"])?;

    assertions::assert_deal_count(&json, 4)?;
    assertions::assert_all_deals_owned_by(&json, "Sarah Johnson")?;

    Ok(())
}

#[test]
fn test_category_filter_keeps_counts_unfiltered() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--category", "at-risk"])?;

    assertions::assert_deal_ids(&json, &["2", "6", "7", "10"])?;
    let tabs = json["content"]["counts"]
        .as_array()
        .expect("counts array");
    assert_eq!(tabs[0]["category"], "all");
    assert_eq!(tabs[0]["count"], 10);
    assert_eq!(tabs[2]["category"], "at-risk");
    assert_eq!(tabs[2]["active"], true);

    Ok(())
}

#[test]
fn test_sort_defaults_to_descending() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--sort", "value"])?;

    assertions::assert_deal_ids(&json, &["3", "1", "5", "8", "2", "7", "9", "10"])?;
    assert_eq!(json["content"]["filters"]["direction"], "desc");

    Ok(())
}

#[test]
fn test_sort_ascending_with_page_size() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&[
        "deals",
        "list",
        "--sort",
        "probability",
        "--direction",
        "asc",
        "--page-size",
        "3",
    ])?;

    assertions::assert_deal_ids(&json, &["5", "10", "6"])?;
    assert_eq!(json["content"]["pagination"]["total_pages"], 4);

    Ok(())
}

#[test]
fn test_next_page_tip_repeats_page_size() -> Result<()> {
    let world = world()?;

    let (_, json) = world.run_json(&["deals", "list", "--page-size", "3"])?;
    let tip = json["suggestions"][0]["command"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert_eq!(tip, "rattle deals list --page 2 --page-size 3");

    // Following the tip shows deals 4 to 6
    let (_, json) = world.run_json(&["deals", "list", "--page", "2", "--page-size", "3"])?;
    assert_eq!(json["content"]["pagination"]["start"], 4);
    assert_eq!(json["content"]["pagination"]["end"], 6);

    Ok(())
}

#[test]
fn test_plain_output_formats_table_and_summary() -> Result<()> {
    let world = world()?;

    let result = world.run(&["deals", "list"])?;

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("[All (10)]"), "{}", out);
    assert!(out.contains("At Risk (4)"));
    assert!(out.contains("$120,000"));
    assert!(out.contains("Negotiation"));
    assert!(out.contains("Showing 1 to 8 of 10 results (page 1 of 2)"));
    assert!(out.contains("Total: 10 deals | Value: $675,000 | Avg probability: 48%"));
    assert!(out.contains("rattle deals list --page 2"));

    Ok(())
}

#[test]
fn test_empty_result_renders_guidance() -> Result<()> {
    let world = world()?;

    let result = world.run(&["deals", "list", "--search", "no such deal"])?;

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("No deals found"));
    assert!(out.contains("No deals match the current filters."));
    assert!(out.contains("rattle deals list"));

    let (_, json) = world.run_json(&["deals", "list", "--search", "no such deal"])?;
    assertions::assert_deal_count(&json, 0)?;
    assert_eq!(json["content"]["pagination"]["start"], 0);

    Ok(())
}

#[test]
fn test_demo_dataset_without_deals_file() -> Result<()> {
    let world = TestWorld::new();

    let (result, json) = world.run_json(&["deals", "list", "--search", "enterprise"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_deal_ids(&json, &["1", "5", "8", "13", "17"])?;

    let (_, json) = world.run_json(&["deals", "list"])?;
    assertions::assert_summary_count(&json, 20)?;
    assert_eq!(json["content"]["pagination"]["total_pages"], 3);

    Ok(())
}

#[test]
fn test_direction_requires_sort() -> Result<()> {
    let world = world()?;

    let result = world.run(&["deals", "list", "--direction", "asc"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("--sort"));

    Ok(())
}

#[test]
fn test_zero_page_size_is_rejected() -> Result<()> {
    let world = world()?;

    let result = world.run(&["deals", "list", "--page-size", "0"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("page size must be at least 1"));

    Ok(())
}
