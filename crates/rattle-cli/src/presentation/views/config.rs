use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.data.exists { "" } else { " (not created, using defaults)" };
        writeln!(f, "Config file:        {}{}", self.data.path, state)?;
        writeln!(f, "Page size:          {}", self.data.page_size)?;
        writeln!(f, "At-risk threshold:  {}%", self.data.at_risk_threshold)?;
        writeln!(f, "Deals:              {}", self.data.deals_source)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.created {
            writeln!(f, "Wrote {}", self.data.path)
        } else {
            writeln!(f, "Left {} unchanged", self.data.path)
        }
    }
}
