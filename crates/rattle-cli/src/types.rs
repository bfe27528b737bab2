use clap::ValueEnum;
use rattle_engine::{DealCategory, SortDirection, SortKey};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CategoryArg {
    All,
    Open,
    AtRisk,
    Won,
    Lost,
}

impl fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DealCategory::from(*self).as_str())
    }
}

impl From<CategoryArg> for DealCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => DealCategory::All,
            CategoryArg::Open => DealCategory::Open,
            CategoryArg::AtRisk => DealCategory::AtRisk,
            CategoryArg::Won => DealCategory::Won,
            CategoryArg::Lost => DealCategory::Lost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortKeyArg {
    Value,
    Probability,
    Stage,
}

impl fmt::Display for SortKeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKeyArg::Value => write!(f, "value"),
            SortKeyArg::Probability => write!(f, "probability"),
            SortKeyArg::Stage => write!(f, "stage"),
        }
    }
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Value => SortKey::Value,
            SortKeyArg::Probability => SortKey::Probability,
            SortKeyArg::Stage => SortKey::Stage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl fmt::Display for DirectionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionArg::Asc => write!(f, "asc"),
            DirectionArg::Desc => write!(f, "desc"),
        }
    }
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}
