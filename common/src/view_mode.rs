use std::fmt;

use serde::{Deserialize, Serialize};

/// How the customer list is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "table" => Some(ViewMode::Table),
            "card" => Some(ViewMode::Card),
            _ => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
