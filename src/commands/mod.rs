mod migrate;

pub use migrate::{MigrateOptions, cmd_migrate_all, cmd_migrate_issue};
