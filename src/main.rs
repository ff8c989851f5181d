use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use migratron::commands::{MigrateOptions, cmd_migrate_all, cmd_migrate_issue};

#[derive(Parser)]
#[command(name = "migratron")]
#[command(about = "Tools for migrating repositories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tools to migrate issues between repos
    Issues {
        #[command(subcommand)]
        action: IssuesAction,
    },
}

#[derive(Subcommand)]
enum IssuesAction {
    /// Migrate a single issue
    Migrate {
        /// Issue number in the source repository
        number: u64,

        #[command(flatten)]
        options: MigrateArgs,
    },

    /// Migrate all repo issues to the new repo
    All {
        #[command(flatten)]
        options: MigrateArgs,
    },
}

#[derive(Args)]
struct MigrateArgs {
    /// Your GitHub login
    #[arg(long)]
    login: Option<String>,

    /// Label to denote an issue has been processed and migrated
    #[arg(long = "to-label", default_value = "migration/migrated")]
    to_label: String,

    /// Label to denote an issue has been created as result of an import
    #[arg(long = "from-label", default_value = "migration/imported")]
    from_label: String,
}

impl From<MigrateArgs> for MigrateOptions {
    fn from(args: MigrateArgs) -> Self {
        MigrateOptions {
            login: args.login,
            migrated_label: args.to_label,
            imported_label: args.from_label,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issues { action } => match action {
            IssuesAction::Migrate { number, options } => {
                cmd_migrate_issue(number, options.into()).await
            }
            IssuesAction::All { options } => cmd_migrate_all(options.into()).await,
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
