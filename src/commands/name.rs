use clap::{Args, Subcommand};
use serde::Serialize;

use rebrand::{log_status, AndroidProject, IosProject};

use super::{FieldUpdate, FieldValue, Platform, TargetArgs};

#[derive(Args)]
pub struct NameArgs {
    #[command(subcommand)]
    pub command: NameCommand,
}

#[derive(Subcommand)]
pub enum NameCommand {
    /// Read the current app name
    Get {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Rewrite the app name
    Set {
        /// New human-readable application name (written as-is; XML escaping
        /// is the caller's responsibility)
        new_name: String,

        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum NameOutput {
    Get { results: Vec<FieldValue> },
    Set { results: Vec<FieldUpdate> },
}

pub fn run(args: NameArgs) -> rebrand::Result<NameOutput> {
    match args.command {
        NameCommand::Get { target } => {
            let mut results = Vec::new();

            for platform in target.platforms() {
                let value = match platform {
                    Platform::Ios => IosProject::at_root(&target.project_root).app_name()?,
                    Platform::Android => AndroidProject::at_root(&target.project_root).app_name()?,
                };
                results.push(FieldValue {
                    platform: platform.label(),
                    value,
                });
            }

            Ok(NameOutput::Get { results })
        }
        NameCommand::Set { new_name, target } => {
            let mut results = Vec::new();

            for platform in target.platforms() {
                let updated = match platform {
                    Platform::Ios => {
                        IosProject::at_root(&target.project_root).set_app_name(&new_name)?
                    }
                    Platform::Android => {
                        AndroidProject::at_root(&target.project_root).set_app_name(&new_name)?
                    }
                };

                if updated {
                    log_status!(
                        "name",
                        "Updated {} app name to \"{}\"",
                        platform.label(),
                        new_name
                    );
                } else {
                    log_status!("name", "No app name field found in {} project", platform.label());
                }

                results.push(FieldUpdate {
                    platform: platform.label(),
                    updated,
                });
            }

            Ok(NameOutput::Set { results })
        }
    }
}
