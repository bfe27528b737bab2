use rattle_types::DealStage;

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Title Case label for a stage token; unknown tokens pass through.
pub fn stage_label(token: &str) -> String {
    token
        .parse::<DealStage>()
        .map(|stage| stage.label().to_string())
        .unwrap_or_else(|_| token.to_string())
}

pub fn category_label(token: &str) -> &str {
    match token {
        "all" => "All",
        "open" => "Open",
        "at-risk" => "At Risk",
        "won" => "Won",
        "lost" => "Lost",
        other => other,
    }
}
