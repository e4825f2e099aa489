//! kancli - EC2 instance inventory and lifecycle CLI.
//!
//! Lists instances with normalized fields and issues start/stop/
//! terminate after confirming the target instance exists.

mod config;
mod ec2;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use tracing::debug;

use config::{Args, Command, Config};
use ec2::client::Ec2Client;
use error::KancliError;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);

    let _guard = match logging::init(config.debug) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &config).await {
        match e.downcast_ref::<KancliError>() {
            Some(KancliError::InstanceNotFound(_)) => {
                println!("{}", e.to_string().yellow());
                std::process::exit(1);
            }
            Some(KancliError::UserCancelled) => {
                println!("{}", "Aborted. No changes made.".yellow());
            }
            _ => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    let client = Ec2Client::new(config.profile.as_deref(), config.region.as_deref()).await?;
    debug!(region = client.region(), "EC2 client ready");

    match command {
        Command::GetInstances => {
            let records = client.list_instances().await?;
            output::print_instances(&records);
            Ok(())
        }
        Command::StartInstance { instance_id } => {
            lifecycle(&client, LifecycleAction::Start, &instance_id, config.yes).await
        }
        Command::StopInstance { instance_id } => {
            lifecycle(&client, LifecycleAction::Stop, &instance_id, config.yes).await
        }
        Command::TerminateInstance { instance_id } => {
            lifecycle(&client, LifecycleAction::Terminate, &instance_id, config.yes).await
        }
    }
}

/// Lifecycle operations that mutate an instance.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LifecycleAction {
    Start,
    Stop,
    Terminate,
}

impl LifecycleAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Terminate => "terminate",
        }
    }
}

/// Confirm, validate existence, then issue the lifecycle call.
///
/// `pre_confirmed` (the `--yes` flag) skips the prompt but never the
/// existence check.
async fn lifecycle(
    client: &Ec2Client,
    action: LifecycleAction,
    instance_id: &str,
    pre_confirmed: bool,
) -> Result<()> {
    if !pre_confirmed {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to {} instance {}?",
                action.verb(),
                instance_id
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Err(KancliError::UserCancelled.into());
        }
    }

    if !client.instance_exists(instance_id).await? {
        return Err(KancliError::InstanceNotFound(instance_id.to_string()).into());
    }

    match action {
        LifecycleAction::Start => client.start_instance(instance_id).await?,
        LifecycleAction::Stop => client.stop_instance(instance_id).await?,
        LifecycleAction::Terminate => client.terminate_instance(instance_id).await?,
    }

    println!(
        "{} {} request accepted for {}",
        "Done:".green().bold(),
        action.verb(),
        instance_id.bright_cyan()
    );
    Ok(())
}
