use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod generate_jobs;
mod migrate;

#[derive(Parser)]
#[command(about = "item board and job posting seeder")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the item board and the job listing API
    Listen,
    /// Apply the embedded database migrations
    Migrate,
    /// Insert the sample job postings that are not stored yet
    GenerateJobs,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::GenerateJobs) => {
            generate_jobs::run().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn subcommands_use_kebab_case() {
        let cmd = Cmd::try_parse_from(["jobboard", "generate-jobs"]).unwrap();
        assert!(matches!(cmd.command, Some(SubCommandType::GenerateJobs)));
        assert!(Cmd::try_parse_from(["jobboard", "generate_jobs"]).is_err());
    }
}
