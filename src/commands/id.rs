use clap::{Args, Subcommand};
use serde::Serialize;

use rebrand::{log_status, AndroidProject, IosProject};

use super::{FieldUpdate, FieldValue, Platform, TargetArgs};

#[derive(Args)]
pub struct IdArgs {
    #[command(subcommand)]
    pub command: IdCommand,
}

#[derive(Subcommand)]
pub enum IdCommand {
    /// Read the current bundle/package identifier
    Get {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Rewrite the bundle/package identifier
    Set {
        /// New reverse-domain identifier (no syntax validation is applied)
        new_id: String,

        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum IdOutput {
    Get { results: Vec<FieldValue> },
    Set { results: Vec<FieldUpdate> },
}

pub fn run(args: IdArgs) -> rebrand::Result<IdOutput> {
    match args.command {
        IdCommand::Get { target } => {
            let mut results = Vec::new();

            for platform in target.platforms() {
                let value = match platform {
                    Platform::Ios => IosProject::at_root(&target.project_root).bundle_id()?,
                    Platform::Android => {
                        AndroidProject::at_root(&target.project_root).application_id()?
                    }
                };
                results.push(FieldValue {
                    platform: platform.label(),
                    value,
                });
            }

            Ok(IdOutput::Get { results })
        }
        IdCommand::Set { new_id, target } => {
            let mut results = Vec::new();

            for platform in target.platforms() {
                let updated = match platform {
                    Platform::Ios => {
                        IosProject::at_root(&target.project_root).set_bundle_id(&new_id)?
                    }
                    Platform::Android => {
                        AndroidProject::at_root(&target.project_root).set_application_id(&new_id)?
                    }
                };

                if updated {
                    log_status!(
                        "id",
                        "Updated {} identifier to {}",
                        platform.label(),
                        new_id
                    );
                } else {
                    log_status!(
                        "id",
                        "No current identifier found in {} project; nothing updated",
                        platform.label()
                    );
                }

                results.push(FieldUpdate {
                    platform: platform.label(),
                    updated,
                });
            }

            Ok(IdOutput::Set { results })
        }
    }
}
