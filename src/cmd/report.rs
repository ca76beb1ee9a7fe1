use anyhow::Result;
use tracing::info;

use crate::cli::ReportArgs;
use crate::core::api::GitHubClient;
use crate::core::config::ReportConfig;
use crate::core::contributors::{enrich_sponsors, Pipeline, PLATFORM_INCEPTION};
use crate::core::report::{write_reports, ReportMetadata};
use crate::error::CliError;
use crate::utils::theme::{highlight, success_message, warning_message};

pub async fn run(args: ReportArgs) -> Result<()> {
    let config = ReportConfig::from_args(args).map_err(CliError::from)?;

    info!(
        "generating contributor report with contributors version {}",
        env!("CARGO_PKG_VERSION")
    );

    let client =
        GitHubClient::new(&config.token, config.endpoints.clone()).map_err(CliError::from)?;
    let web_url = client.web_url().to_string();

    let aggregation = Pipeline::new(&client, &web_url, config.collect_options())
        .with_inception(PLATFORM_INCEPTION)
        .run(&config.selector)
        .await
        .map_err(CliError::from)?;
    let mut contributors = aggregation.contributors;

    if config.sponsor_info {
        enrich_sponsors(&client, &web_url, &mut contributors)
            .await
            .map_err(CliError::from)?;
    }

    if contributors.is_empty() {
        eprintln!(
            "{}",
            warning_message(&format!(
                "No contributors found across {} repositories",
                aggregation.repositories.len()
            ))
        );
    }

    let markdown_path = config.markdown_path();
    let json_path = config.json_path();
    write_reports(
        &ReportMetadata::from_config(&config),
        &contributors,
        &markdown_path,
        &json_path,
    )?;

    println!(
        "{}",
        success_message(&format!(
            "Wrote {} contributors to {} and {}",
            highlight(&contributors.len().to_string()),
            markdown_path.display(),
            json_path.display()
        ))
    );

    Ok(())
}
