use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LeaderboardEntryViewModel, LeaderboardViewModel,
    OwnerEntry, OwnerListViewModel, PipelineViewModel, StageRow, StatusBadge,
};
use rattle_engine::{LeaderboardEntry, OwnerCount, StageCount};

pub fn present_owners(counts: Vec<OwnerCount>) -> CommandResultViewModel<OwnerListViewModel> {
    let owners: Vec<OwnerEntry> = counts
        .into_iter()
        .map(|c| OwnerEntry {
            name: c.owner,
            deal_count: c.deal_count,
        })
        .collect();

    let mut result = CommandResultViewModel::new(OwnerListViewModel { owners });
    if let Some(first) = result.content.owners.first() {
        let command = format!("rattle deals list --owner \"{}\"", first.name);
        result = result
            .with_suggestion(Guidance::new("Filter the deal list by owner").with_command(command));
    }
    result
}

pub fn present_pipeline(stages: &[StageCount]) -> CommandResultViewModel<PipelineViewModel> {
    let rows = stages
        .iter()
        .map(|s| StageRow {
            stage: s.stage.as_str().to_string(),
            count: s.count,
            share_pct: s.share_pct,
            value: s.value,
        })
        .collect();

    CommandResultViewModel::new(PipelineViewModel {
        stages: rows,
        total_deals: stages.iter().map(|s| s.count).sum(),
    })
}

pub fn present_leaderboard(
    entries: Vec<LeaderboardEntry>,
    limit: usize,
) -> CommandResultViewModel<LeaderboardViewModel> {
    let total_owners = entries.len();

    let rows: Vec<LeaderboardEntryViewModel> = entries
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, e)| LeaderboardEntryViewModel {
            rank: i + 1,
            owner: e.owner,
            won_value: e.won_value,
            won_count: e.won_count,
            open_value: e.open_value,
            deal_count: e.deal_count,
        })
        .collect();

    let shown = rows.len();
    let mut result = CommandResultViewModel::new(LeaderboardViewModel {
        entries: rows,
        total_owners,
    });

    if shown < total_owners {
        result = result
            .with_badge(StatusBadge::info(format!(
                "Top {} of {} owners",
                shown, total_owners
            )))
            .with_suggestion(
                Guidance::new("Show every owner")
                    .with_command(format!("rattle leaderboard --limit {}", total_owners)),
            );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rattle_engine::{leaderboard, owner_counts, stage_distribution};
    use rattle_testing::sample_pipeline;

    #[test]
    fn test_owner_deal_counts() {
        let result = present_owners(owner_counts(&sample_pipeline()));
        let owners: Vec<(&str, usize)> = result
            .content
            .owners
            .iter()
            .map(|o| (o.name.as_str(), o.deal_count))
            .collect();
        assert_eq!(
            owners,
            vec![("Emily Rodriguez", 3), ("Mike Chen", 3), ("Sarah Johnson", 4)]
        );
    }

    #[test]
    fn test_pipeline_sums_value_per_stage() {
        let result = present_pipeline(&stage_distribution(&sample_pipeline()));

        let won = result
            .content
            .stages
            .iter()
            .find(|s| s.stage == "closed-won")
            .map(|s| (s.count, s.value));
        assert_eq!(won, Some((2, 310_000)));
        assert_eq!(result.content.total_deals, 10);
    }

    #[test]
    fn test_leaderboard_limit() {
        let result = present_leaderboard(leaderboard(&sample_pipeline()), 2);

        assert_eq!(result.content.entries.len(), 2);
        assert_eq!(result.content.entries[0].owner, "Emily Rodriguez");
        assert_eq!(result.content.entries[1].rank, 2);
        assert_eq!(result.content.total_owners, 3);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("rattle leaderboard --limit 3")
        );
    }
}
