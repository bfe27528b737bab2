use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rattle_types::DealStage;

/// Colour only when stdout is a terminal and `NO_COLOR` is unset.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Colour an already padded cell by stage token.
pub fn stage_cell(cell: &str, token: &str) -> String {
    if !colors_enabled() {
        return cell.to_string();
    }

    match token.parse::<DealStage>() {
        Ok(DealStage::Prospecting) => cell.dimmed().to_string(),
        Ok(DealStage::Qualification) => cell.blue().to_string(),
        Ok(DealStage::Proposal) => cell.cyan().to_string(),
        Ok(DealStage::Negotiation) => cell.yellow().to_string(),
        Ok(DealStage::ClosedWon) => cell.green().to_string(),
        Ok(DealStage::ClosedLost) => cell.red().to_string(),
        Err(_) => cell.to_string(),
    }
}

pub fn bold(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
