// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Command names and aliases match the long-standing netFIELD helper CLI.

use clap::{Parser, Subcommand};
use netfield::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netfield")]
#[command(about = "Create, update, and deploy containers on netFIELD devices")]
#[command(version)]
pub struct Cli {
    /// Echo every request and response
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit results as JSON lines
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Quiet
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a container, or update the one with the same displayName
    #[command(name = "createContainer", visible_alias = "cc")]
    CreateContainer {
        /// API key
        #[arg(short, long)]
        key: String,

        /// Version tag of the image
        #[arg(short, long)]
        tag: String,

        /// Container definition file (JSON, or YAML by extension)
        #[arg(long = "config-container", visible_alias = "oc")]
        config_container: PathBuf,
    },

    /// Create or update a container and deploy it to a device
    #[command(name = "createAndDeployContainer", visible_alias = "cdc")]
    CreateAndDeployContainer {
        #[arg(short, long)]
        key: String,

        #[arg(short, long)]
        tag: String,

        /// Device to deploy to
        #[arg(short, long)]
        device: String,

        #[arg(long = "config-container", visible_alias = "oc")]
        config_container: PathBuf,

        /// Device-specific container options; defaults to {}
        #[arg(long = "config-device", visible_alias = "od")]
        config_device: Option<PathBuf>,

        /// Remove an existing deployment first
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy an existing container, by id or displayName, to a device
    #[command(name = "deployContainer", visible_alias = "dc")]
    DeployContainer {
        #[arg(short, long)]
        key: String,

        #[arg(short, long)]
        device: String,

        /// Container id or displayName
        #[arg(short, long)]
        container: String,

        #[arg(long = "config-device", visible_alias = "od")]
        config_device: Option<PathBuf>,

        #[arg(short, long)]
        force: bool,
    },

    /// Deploy an existing container to every device of a group
    #[command(name = "deployContainerOnGroup", visible_alias = "dcg")]
    DeployContainerOnGroup {
        #[arg(short, long)]
        key: String,

        /// Group id
        #[arg(short, long)]
        group: String,

        #[arg(short, long)]
        container: String,

        #[arg(long = "config-device", visible_alias = "od")]
        config_device: Option<PathBuf>,

        #[arg(short, long)]
        force: bool,
    },

    /// Invoke a method on a container running on a device
    #[command(name = "postMethod", visible_alias = "pm")]
    PostMethod {
        #[arg(short, long)]
        key: String,

        #[arg(short, long)]
        device: String,

        /// Technical name of the target container
        #[arg(short = 'n', long)]
        container_name: String,

        #[arg(short, long)]
        method_name: String,

        /// JSON payload; defaults to {}
        #[arg(short, long)]
        payload: Option<String>,

        /// Attempts while the container answers 404
        #[arg(short = 'r', long, default_value_t = 1)]
        max_retries: u32,

        /// Seconds to wait between attempts
        #[arg(short, long, default_value_t = 0)]
        sleep_interval: u64,
    },

    /// Update a container by id, then delete and recreate its deployment (deprecated)
    #[command(name = "updateAndRedeployContainer", visible_alias = "udc")]
    UpdateAndRedeployContainer {
        #[arg(short, long)]
        key: String,

        #[arg(short, long)]
        tag: String,

        /// Container id
        #[arg(short, long)]
        container: String,

        #[arg(short, long)]
        device: String,

        #[arg(long = "config-container", visible_alias = "oc")]
        config_container: PathBuf,

        #[arg(long = "config-device", visible_alias = "od")]
        config_device: Option<PathBuf>,
    },
}
