use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

pub mod id;
pub mod name;

/// Platform projects a command can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

/// Shared targeting arguments for all field commands.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Limit to one platform project (default: both)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Project root containing the ios/ and android/ directories
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,
}

impl TargetArgs {
    pub fn platforms(&self) -> Vec<Platform> {
        match self.platform {
            Some(platform) => vec![platform],
            None => vec![Platform::Ios, Platform::Android],
        }
    }
}

/// One platform's read result.
#[derive(Serialize)]
pub struct FieldValue {
    pub platform: &'static str,
    pub value: Option<String>,
}

/// One platform's write result. `updated: false` means the field (or the
/// anchor value it is rewritten against) was not found — not an error.
#[derive(Serialize)]
pub struct FieldUpdate {
    pub platform: &'static str,
    pub updated: bool,
}
