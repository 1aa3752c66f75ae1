use crate::consts::DEFAULT_LAYOUT_PATH;
use clap::Args;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone)]
pub struct GridConfig {
    #[arg(global = true, short, long, default_value = DEFAULT_LAYOUT_PATH)]
    pub layout: String,

    #[arg(global = true, long, default_value_t = false)]
    pub debug: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT_PATH.to_string(),
            debug: false,
        }
    }
}

impl GridConfig {
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
