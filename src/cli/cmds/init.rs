use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.config_path();
        let config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            fs.read_config()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write_config(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        fs.initialize()
            .with_context(|| format!("failed to create '{}'", fs.store_path().display()))?;

        Ok(if !already_repo {
            cli::Output::Str(format!(
                "Repository initialized in '{}'",
                fs.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::str("Repository configuration reset to defaults.")
        } else {
            cli::Output::Str(format!(
                "Repository reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
