use serde::Serialize;
use std::fmt;

use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub page_size: usize,
    pub at_risk_threshold: u8,
    /// `demo` or the deal file path
    pub deals_source: String,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub created: bool,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigInitView::new(self))
    }
}
