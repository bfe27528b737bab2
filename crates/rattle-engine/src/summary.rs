use std::borrow::Borrow;

use rattle_types::Deal;
use serde::Serialize;

use crate::iter_deals;
use crate::view_state::{DealCategory, ListConfig};

/// Aggregate row under the deal table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableSummary {
    pub count: usize,
    /// Saturates at `u64::MAX`.
    pub total_value: u64,
    /// Mean probability; 0 for an empty list.
    pub avg_probability: f64,
}

pub fn summarize<D: Borrow<Deal>>(deals: &[D]) -> TableSummary {
    let count = deals.len();
    let total_value = iter_deals(deals).fold(0u64, |acc, d| acc.saturating_add(d.value));
    let probability_sum: u64 = iter_deals(deals).map(|d| u64::from(d.probability)).sum();

    let avg_probability = if count == 0 {
        0.0
    } else {
        probability_sum as f64 / count as f64
    };

    TableSummary {
        count,
        total_value,
        avg_probability,
    }
}

/// Tab badge counts, taken over the whole collection regardless of view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub open: usize,
    pub at_risk: usize,
    pub won: usize,
    pub lost: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: DealCategory) -> usize {
        match category {
            DealCategory::All => self.all,
            DealCategory::Open => self.open,
            DealCategory::AtRisk => self.at_risk,
            DealCategory::Won => self.won,
            DealCategory::Lost => self.lost,
        }
    }
}

pub fn category_counts<D: Borrow<Deal>>(deals: &[D], config: &ListConfig) -> CategoryCounts {
    let count = |category: DealCategory| {
        iter_deals(deals)
            .filter(|d| category.matches(d, config.at_risk_threshold))
            .count()
    };

    CategoryCounts {
        all: deals.len(),
        open: count(DealCategory::Open),
        at_risk: count(DealCategory::AtRisk),
        won: count(DealCategory::Won),
        lost: count(DealCategory::Lost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rattle_types::DealStage;

    fn deal(stage: DealStage, value: u64, probability: u8) -> Deal {
        Deal {
            stage,
            value,
            probability,
            ..Default::default()
        }
    }

    #[test]
    fn test_summarize() {
        let deals = vec![
            deal(DealStage::Proposal, 100, 30),
            deal(DealStage::ClosedWon, 200, 100),
            deal(DealStage::Negotiation, 300, 35),
        ];
        let summary = summarize(&deals);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_value, 600);
        assert!((summary.avg_probability - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_borrowed_slice() {
        let deals = vec![deal(DealStage::Proposal, 10, 10), deal(DealStage::Proposal, 20, 20)];
        let refs: Vec<&Deal> = deals.iter().collect();
        assert_eq!(summarize(&refs), summarize(&deals));
    }

    #[test]
    fn test_summarize_empty_is_zero_not_nan() {
        let summary = summarize::<Deal>(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_value, 0);
        assert_eq!(summary.avg_probability, 0.0);
        assert!(!summary.avg_probability.is_nan());
    }

    #[test]
    fn test_summarize_saturates_instead_of_overflowing() {
        let huge = u64::MAX / 2 + 1;
        let deals = vec![
            deal(DealStage::Proposal, huge, 50),
            deal(DealStage::Negotiation, huge, 70),
        ];
        let summary = summarize(&deals);
        assert_eq!(summary.total_value, u64::MAX);
        assert_eq!(summary.count, 2);
        assert!((summary.avg_probability - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_counts() {
        let deals = vec![
            deal(DealStage::Proposal, 0, 30),
            deal(DealStage::ClosedWon, 0, 100),
            deal(DealStage::Negotiation, 0, 35),
            deal(DealStage::ClosedLost, 0, 10),
            deal(DealStage::Qualification, 0, 60),
        ];
        let counts = category_counts(&deals, &ListConfig::default());
        assert_eq!(
            counts,
            CategoryCounts {
                all: 5,
                open: 3,
                at_risk: 2,
                won: 1,
                lost: 1,
            }
        );
        assert_eq!(counts.get(DealCategory::AtRisk), 2);
    }
}
