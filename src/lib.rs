pub mod cli;
pub mod error;

pub mod cmd {
    pub mod report;
}

pub mod core {
    pub mod api;
    pub mod config;
    pub mod contributors;
    pub mod report;
}

pub mod utils {
    pub mod theme;
}

use anyhow::Result;
use cli::Cli;

pub async fn execute(cli: Cli) -> Result<()> {
    cmd::report::run(cli.report).await
}
