//! Application configuration.

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: &str = env!("BUILD_COMMIT");
const BUILD_DATE: &str = env!("BUILD_DATE");

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kancli")]
#[command(about = "EC2 instance inventory and lifecycle CLI")]
#[command(version = const_format::formatcp!(
    "{} (commit: {}, build date: {})",
    VERSION, COMMIT, BUILD_DATE
))]
pub struct Args {
    /// Enable debug-level logging
    #[arg(long, global = true, overrides_with = "no_debug")]
    pub debug: bool,

    /// Keep logging at error level (default)
    #[arg(long, global = true, overrides_with = "debug")]
    pub no_debug: bool,

    /// AWS region (falls back to the SDK default chain)
    #[arg(short, long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS profile to use
    #[arg(short, long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Skip the confirmation prompt on lifecycle commands
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all instances in the region
    GetInstances,
    /// Start a stopped instance
    StartInstance {
        /// Instance to start
        #[arg(short = 'i', long)]
        instance_id: String,
    },
    /// Stop a running instance
    StopInstance {
        /// Instance to stop
        #[arg(short = 'i', long)]
        instance_id: String,
    },
    /// Terminate an instance
    TerminateInstance {
        /// Instance to terminate
        #[arg(short = 'i', long)]
        instance_id: String,
    },
}

/// Application configuration derived from CLI args.
#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub yes: bool,
}

impl Config {
    /// Create config from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            region: args.region.clone(),
            profile: args.profile.clone(),
            yes: args.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_instances() {
        let args = Args::try_parse_from(["kancli", "get-instances"]).unwrap();
        assert!(matches!(args.command, Command::GetInstances));
        assert!(!args.debug);
        assert!(!args.yes);
    }

    #[test]
    fn test_parse_lifecycle_commands() {
        for (name, id) in [
            ("start-instance", "i-1"),
            ("stop-instance", "i-2"),
            ("terminate-instance", "i-3"),
        ] {
            let args = Args::try_parse_from(["kancli", name, "-i", id]).unwrap();
            let parsed_id = match args.command {
                Command::StartInstance { instance_id }
                | Command::StopInstance { instance_id }
                | Command::TerminateInstance { instance_id } => instance_id,
                Command::GetInstances => panic!("unexpected subcommand"),
            };
            assert_eq!(parsed_id, id);
        }
    }

    #[test]
    fn test_instance_id_is_required() {
        assert!(Args::try_parse_from(["kancli", "start-instance"]).is_err());
    }

    #[test]
    fn test_debug_flag_pair() {
        let args = Args::try_parse_from(["kancli", "--debug", "get-instances"]).unwrap();
        assert!(args.debug);

        let args =
            Args::try_parse_from(["kancli", "--debug", "--no-debug", "get-instances"]).unwrap();
        assert!(!args.debug);
    }

    #[test]
    fn test_yes_flag_after_subcommand() {
        let args =
            Args::try_parse_from(["kancli", "stop-instance", "-i", "i-1", "--yes"]).unwrap();
        assert!(args.yes);
    }
}
