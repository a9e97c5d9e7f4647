//! Small shared enums for the CLI surface

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How headless commands print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    #[strum(serialize = "text")]
    Text,
    /// Pretty-printed JSON
    #[strum(serialize = "json")]
    Json,
}
