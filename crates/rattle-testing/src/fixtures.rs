//! Fixtures for sample deal generation and placement.
//!
//! Provides utilities to:
//! - Build deals fluently with only the fields a test cares about
//! - Produce a small, varied pipeline for filter/sort tests
//! - Write deal collections to disk for CLI tests

use anyhow::Result;
use rattle_types::{Deal, DealStage};
use std::fs;
use std::path::Path;

/// Fluent builder for [`Deal`].
///
/// # Example
/// ```
/// use rattle_testing::DealBuilder;
/// use rattle_types::DealStage;
///
/// let deal = DealBuilder::new("42")
///     .company("Acme Corp")
///     .stage(DealStage::Proposal)
///     .probability(30)
///     .build();
/// assert_eq!(deal.company, "Acme Corp");
/// ```
#[derive(Debug, Clone)]
pub struct DealBuilder {
    deal: Deal,
}

impl DealBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            deal: Deal {
                name: format!("Deal {}", id),
                company: "Initech".to_string(),
                owner: "Mike Chen".to_string(),
                id,
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.deal.name = name.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.deal.company = company.into();
        self
    }

    pub fn value(mut self, value: u64) -> Self {
        self.deal.value = value;
        self
    }

    pub fn stage(mut self, stage: DealStage) -> Self {
        self.deal.stage = stage;
        self
    }

    pub fn probability(mut self, probability: u8) -> Self {
        self.deal.probability = probability;
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.deal.owner = owner.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.deal.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Deal {
        self.deal
    }
}

/// Ten deals spanning every stage, three owners and both sides of the
/// default at-risk threshold.
///
/// | id | company       | value  | stage         | prob | owner           |
/// |----|---------------|--------|---------------|------|-----------------|
/// | 1  | Acme Corp     | 120000 | negotiation   | 75   | Sarah Johnson   |
/// | 2  | Globex        | 45000  | proposal      | 30   | Mike Chen       |
/// | 3  | Initech       | 250000 | closed-won    | 100  | Emily Rodriguez |
/// | 4  | Acme Labs     | 15000  | qualification | 40   | Mike Chen       |
/// | 5  | Umbrella      | 80000  | closed-lost   | 0    | Sarah Johnson   |
/// | 6  | Hooli         | 8000   | prospecting   | 25   | Emily Rodriguez |
/// | 7  | Stark Ind     | 45000  | negotiation   | 35   | Sarah Johnson   |
/// | 8  | Wayne Ent     | 60000  | closed-won    | 100  | Mike Chen       |
/// | 9  | Soylent       | 30000  | proposal      | 60   | Emily Rodriguez |
/// | 10 | Acme Corp     | 22000  | prospecting   | 10   | Sarah Johnson   |
pub fn sample_pipeline() -> Vec<Deal> {
    let rows: [(&str, &str, &str, u64, DealStage, u8, &str); 10] = [
        ("1", "Enterprise License", "Acme Corp", 120_000, DealStage::Negotiation, 75, "Sarah Johnson"),
        ("2", "Annual Subscription", "Globex", 45_000, DealStage::Proposal, 30, "Mike Chen"),
        ("3", "Multi-Year Contract", "Initech", 250_000, DealStage::ClosedWon, 100, "Emily Rodriguez"),
        ("4", "Starter Package", "Acme Labs", 15_000, DealStage::Qualification, 40, "Mike Chen"),
        ("5", "Platform Migration", "Umbrella", 80_000, DealStage::ClosedLost, 0, "Sarah Johnson"),
        ("6", "Basic Plan", "Hooli", 8_000, DealStage::Prospecting, 25, "Emily Rodriguez"),
        ("7", "Team License", "Stark Ind", 45_000, DealStage::Negotiation, 35, "Sarah Johnson"),
        ("8", "Premium Support", "Wayne Ent", 60_000, DealStage::ClosedWon, 100, "Mike Chen"),
        ("9", "Growth Plan", "Soylent", 30_000, DealStage::Proposal, 60, "Emily Rodriguez"),
        ("10", "Pilot Program", "Acme Corp", 22_000, DealStage::Prospecting, 10, "Sarah Johnson"),
    ];

    rows.into_iter()
        .map(|(id, name, company, value, stage, probability, owner)| {
            DealBuilder::new(id)
                .name(name)
                .company(company)
                .value(value)
                .stage(stage)
                .probability(probability)
                .owner(owner)
                .build()
        })
        .collect()
}

/// Write deals as a pretty JSON array, creating parent directories.
pub fn write_deals_file(path: &Path, deals: &[Deal]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(deals)?)?;
    Ok(())
}
