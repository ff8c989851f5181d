use crate::config::{MigrationConfig, Settings};
use crate::editor::SystemEditor;
use crate::error::{MigratronError, Result};
use crate::migrate::Migrator;
use crate::prompt::Console;
use crate::remote::github::GitHubHost;

/// Flag values shared by the single-issue and batch commands.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub login: Option<String>,
    pub migrated_label: String,
    pub imported_label: String,
}

/// Migrate a single issue from the source to the destination repository.
pub async fn cmd_migrate_issue(number: u64, options: MigrateOptions) -> Result<()> {
    let (settings, config) = load(options)?;

    let host = GitHubHost::new(&settings.token)?;
    let editor = SystemEditor::from_env();
    let migrator = Migrator::new(
        &host,
        &Console,
        &editor,
        &config,
        &settings.from_repo,
        &settings.to_repo,
    );

    migrator.migrate_issue(number).await?;

    Ok(())
}

/// Migrate all eligible issues of the source repository.
pub async fn cmd_migrate_all(options: MigrateOptions) -> Result<()> {
    let (settings, config) = load(options)?;

    let host = GitHubHost::new(&settings.token)?;
    let editor = SystemEditor::from_env();
    let migrator = Migrator::new(
        &host,
        &Console,
        &editor,
        &config,
        &settings.from_repo,
        &settings.to_repo,
    );

    migrator.migrate_all().await
}

fn load(options: MigrateOptions) -> Result<(Settings, MigrationConfig)> {
    let login = options
        .login
        .ok_or_else(|| MigratronError::Config("--login must be set".to_string()))?;

    let settings = Settings::from_env()?;
    let config = MigrationConfig {
        login,
        migrated_label: options.migrated_label,
        imported_label: options.imported_label,
    };

    Ok((settings, config))
}
