use std::process::{Command, Output};

/// Helper struct to run migratron commands with a controlled environment.
///
/// The `MIGRATRON_*` variables are scrubbed from the child environment so
/// tests see exactly the configuration they set.
pub struct MigratronTest {
    env: Vec<(String, String)>,
}

impl MigratronTest {
    pub fn new() -> Self {
        MigratronTest { env: Vec::new() }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// A fully configured environment pointing at placeholder repos.
    pub fn configured() -> Self {
        Self::new()
            .env("MIGRATRON_TOKEN", "test-token")
            .env("MIGRATRON_FROM_REPO", "source-org/tracker")
            .env("MIGRATRON_TO_REPO", "dest-org/tracker")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_migratron"))
            .args(args)
            .env_remove("MIGRATRON_TOKEN")
            .env_remove("MIGRATRON_FROM_REPO")
            .env_remove("MIGRATRON_TO_REPO")
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .expect("Failed to execute migratron command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} unexpectedly succeeded\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
