use clap::builder::BoolishValueParser;
use clap::{Args, Parser};

#[derive(Parser)]
#[command(
    name = "contributors",
    about = "Contributor reports for GitHub organizations and repositories",
    long_about = "Collect the contributors of a GitHub organization or a list of repositories,\noptionally limited to a date range, and write them to a markdown and a JSON report.\n\nEvery option can also be set through the environment variable shown next to it.",
    version
)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    #[arg(long, env = "ORGANIZATION", help = "Organization whose repositories are scanned")]
    pub organization: Option<String>,

    #[arg(
        long,
        env = "REPOSITORY",
        help = "Comma separated list of repositories as owner/name"
    )]
    pub repository: Option<String>,

    #[arg(long, env = "GH_TOKEN", hide_env_values = true, help = "GitHub token")]
    pub token: Option<String>,

    #[arg(
        long = "enterprise-url",
        env = "GH_ENTERPRISE_URL",
        help = "Base URL of a GitHub Enterprise Server instance"
    )]
    pub enterprise_url: Option<String>,

    #[arg(long, env = "START_DATE", help = "Start of the date range (YYYY-MM-DD)")]
    pub start_date: Option<String>,

    #[arg(long, env = "END_DATE", help = "End of the date range (YYYY-MM-DD)")]
    pub end_date: Option<String>,

    #[arg(
        long,
        env = "SPONSOR_INFO",
        value_parser = BoolishValueParser::new(),
        help = "Look up GitHub Sponsors listings"
    )]
    pub sponsor_info: bool,

    #[arg(
        long,
        env = "LINK_TO_PROFILE",
        value_parser = BoolishValueParser::new(),
        help = "Render usernames as @mentions"
    )]
    pub link_to_profile: bool,

    #[arg(
        long = "show-organisations",
        env = "SHOW_ORGANISATIONS",
        help = "Comma separated organizations to group contributors by"
    )]
    pub show_organisations: Option<String>,

    #[arg(
        long,
        env = "ACKNOWLEDGE_COAUTHORS",
        value_parser = BoolishValueParser::new(),
        help = "Count identities named in Co-authored-by trailers"
    )]
    pub acknowledge_coauthors: bool,

    #[arg(
        long,
        env = "RESOLVE_COAUTHOR_EMAILS",
        value_parser = BoolishValueParser::new(),
        help = "Search for the accounts behind co-author email addresses"
    )]
    pub resolve_coauthor_emails: bool,

    #[arg(
        long,
        env = "OUTPUT_FILENAME",
        default_value = "contributors",
        help = "Report file name without extension"
    )]
    pub output_filename: String,
}
