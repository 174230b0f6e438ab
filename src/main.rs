// ABOUTME: Entry point for the netfield CLI application.
// ABOUTME: Parses arguments, sets up logging, and dispatches to command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;
use netfield::api::HttpClient;
use netfield::config::{SearchRoots, Settings};
use netfield::error::Result;
use netfield::output::Output;
use std::env;
use tracing_subscriber::EnvFilter;

/// Log filter used when not verbose, e.g. `LOG_LEVEL=info`.
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose wins; otherwise LOG_LEVEL, falling back to warnings only
    let filter = if cli.verbose {
        EnvFilter::new("netfield=debug")
    } else {
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output_mode());
    output.start_timer();

    let client = match connect() {
        Ok(client) => client,
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let ctx = Context {
        client,
        roots: SearchRoots::current(),
        output,
    };

    if let Err(e) = run(cli.command, &ctx).await {
        ctx.output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn connect() -> Result<HttpClient> {
    let cwd = env::current_dir()?;
    let settings = Settings::discover(&cwd)?;
    Ok(HttpClient::new(&settings)?)
}

async fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::CreateContainer {
            key,
            tag,
            config_container,
        } => commands::create_container(ctx, &key, &tag, &config_container).await,
        Commands::CreateAndDeployContainer {
            key,
            tag,
            device,
            config_container,
            config_device,
            force,
        } => {
            commands::create_and_deploy(
                ctx,
                &key,
                &tag,
                &device,
                &config_container,
                config_device.as_deref(),
                force,
            )
            .await
        }
        Commands::DeployContainer {
            key,
            device,
            container,
            config_device,
            force,
        } => {
            commands::deploy_container(
                ctx,
                &key,
                &device,
                &container,
                config_device.as_deref(),
                force,
            )
            .await
        }
        Commands::DeployContainerOnGroup {
            key,
            group,
            container,
            config_device,
            force,
        } => {
            commands::deploy_on_group(
                ctx,
                &key,
                &group,
                &container,
                config_device.as_deref(),
                force,
            )
            .await
        }
        Commands::PostMethod {
            key,
            device,
            container_name,
            method_name,
            payload,
            max_retries,
            sleep_interval,
        } => {
            commands::post_method(
                ctx,
                &key,
                &device,
                &container_name,
                &method_name,
                payload.as_deref(),
                max_retries,
                sleep_interval,
            )
            .await
        }
        Commands::UpdateAndRedeployContainer {
            key,
            tag,
            container,
            device,
            config_container,
            config_device,
        } => {
            commands::update_and_redeploy(
                ctx,
                &key,
                &tag,
                &container,
                &device,
                &config_container,
                config_device.as_deref(),
            )
            .await
        }
    }
}
