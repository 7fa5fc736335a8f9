use anyhow::Result;
use clap::{Parser, Subcommand};

use client_version::config::{self, BehaviorConfig};
use client_version::update::check_for_update;
use client_version::{compare_versions, ui, Version};

#[derive(Parser)]
#[command(
    name = "client-version",
    version,
    about = "Compare client versions and detect outdated installs"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether CANDIDATE is newer than or equal to BASELINE
    Compare { candidate: String, baseline: String },

    /// Show how a version string is parsed
    Parse { input: String },

    /// Check whether an advertised version supersedes the local one
    Check {
        #[arg(short, long, help = "Version advertised by the remote side")]
        remote: String,

        #[arg(long, help = "Local version (overrides client.current_version)")]
        current: Option<String>,

        #[arg(long, help = "Treat dev/alpha/beta/rc versions as updates")]
        include_prereleases: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Compare {
            candidate,
            baseline,
        } => {
            let newer = compare_versions(Some(&candidate), Some(&baseline));
            ui::display_comparison(&candidate, &baseline, newer);
            if !newer {
                std::process::exit(1);
            }
        }
        Command::Parse { input } => match Version::parse(&input) {
            Ok(parsed) => ui::display_parsed_version(&parsed),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        Command::Check {
            remote,
            current,
            include_prereleases,
        } => {
            let config = match config::load_config(args.config.as_deref()) {
                Ok(cfg) => cfg,
                Err(e) => {
                    ui::display_error(&format!("Error loading config: {}", e));
                    std::process::exit(1);
                }
            };

            let current = current.or(config.client.current_version);
            let behavior = BehaviorConfig {
                include_prereleases: include_prereleases || config.behavior.include_prereleases,
            };

            let status = check_for_update(current.as_deref(), Some(&remote), &behavior);
            ui::display_update_status(&status);
            if status.is_outdated() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
