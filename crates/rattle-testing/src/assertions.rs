//! Custom assertions for rattle-specific validation.
//!
//! Provides high-level assertions over `--format json` output:
//! - Deal count / id checks on a list page
//! - Owner invariants across every listed deal
//! - Summary row checks

use anyhow::{Context, Result};
use serde_json::Value;

fn listed_deals(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["deals"]
        .as_array()
        .context("Expected 'content.deals' array in JSON")
}

/// Assert that the listed page contains the expected number of deals.
pub fn assert_deal_count(json: &Value, expected: usize) -> Result<()> {
    let deals = listed_deals(json)?;

    if deals.len() != expected {
        anyhow::bail!("Expected {} deals, got {}", expected, deals.len());
    }

    Ok(())
}

/// Assert that the listed page contains exactly these ids, in order.
pub fn assert_deal_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids: Vec<&str> = listed_deals(json)?
        .iter()
        .filter_map(|d| d["id"].as_str())
        .collect();

    if ids != expected {
        anyhow::bail!("Expected deal ids {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert that every listed deal has the given owner.
pub fn assert_all_deals_owned_by(json: &Value, owner: &str) -> Result<()> {
    for (i, deal) in listed_deals(json)?.iter().enumerate() {
        let deal_owner = deal["owner"]
            .as_str()
            .with_context(|| format!("Deal {} missing owner", i))?;

        if deal_owner != owner {
            anyhow::bail!(
                "Deal {} is owned by {} but expected {}",
                i,
                deal_owner,
                owner
            );
        }
    }

    Ok(())
}

/// Assert the summary row's filtered count.
pub fn assert_summary_count(json: &Value, expected: u64) -> Result<()> {
    let count = json["content"]["summary"]["count"]
        .as_u64()
        .context("Expected 'content.summary.count' in JSON")?;

    if count != expected {
        anyhow::bail!("Expected summary count {}, got {}", expected, count);
    }

    Ok(())
}
