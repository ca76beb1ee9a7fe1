use super::ReportMetadata;
use crate::core::contributors::{group_by_organisation, ContributorRecord};

pub const FOOTER: &str =
    "_this file was generated by the [Contributors GitHub Action](https://github.com/github/contributors)_";

pub fn render(metadata: &ReportMetadata, contributors: &[ContributorRecord]) -> String {
    let mut out = String::from("# Contributors\n\n");

    if let Some(window) = metadata.window {
        out.push_str(&format!("- Date range for contributor list:  {}\n", window));
    }
    if let Some(org) = &metadata.organization {
        out.push_str(&format!("- Organization: {}\n", org));
    }
    if !metadata.repository_list.is_empty() {
        out.push_str(&format!(
            "- Repository: {}\n",
            metadata.repository_list.join(", ")
        ));
    }
    out.push('\n');

    out.push_str(&summary_table(metadata, contributors));

    let buckets = group_by_organisation(contributors, &metadata.show_organisations);
    let header = table_header(metadata);
    let single_independent = buckets.len() == 1 && buckets[0].is_independent();

    for bucket in &buckets {
        if !single_independent {
            if bucket.is_independent() {
                out.push_str(&format!("## {}\n", bucket.name));
            } else {
                out.push_str(&format!(
                    "## [{name}]({}/{name})\n",
                    metadata.web_url.trim_end_matches('/'),
                    name = bucket.name
                ));
            }
        }

        out.push_str(&header);
        for contributor in &bucket.contributors {
            out.push_str(&row(metadata, contributor));
        }
    }

    out.push_str(&format!("\n {}\n", FOOTER));
    out
}

pub fn summary_table(metadata: &ReportMetadata, contributors: &[ContributorRecord]) -> String {
    let total: u64 = contributors.iter().map(|c| c.contribution_count).sum();

    if metadata.window.is_some() {
        format!(
            "| Total Contributors | Total Contributions | % New Contributors |\n\
             | --- | --- | --- |\n\
             | {} | {} | {}% |\n\n",
            contributors.len(),
            total,
            new_contributor_percentage(contributors)
        )
    } else {
        format!(
            "| Total Contributors | Total Contributions |\n\
             | --- | --- |\n\
             | {} | {} |\n\n",
            contributors.len(),
            total
        )
    }
}

/// Share of new contributors, rounded to two decimals.
pub fn new_contributor_percentage(contributors: &[ContributorRecord]) -> f64 {
    if contributors.is_empty() {
        return 0.0;
    }
    let new = contributors.iter().filter(|c| c.new_contributor).count();
    let ratio = new as f64 / contributors.len() as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}

fn columns(metadata: &ReportMetadata) -> Vec<String> {
    let mut columns = vec![
        "Username".to_string(),
        "All Time Contribution Count".to_string(),
    ];
    if metadata.window.is_some() {
        columns.push("New Contributor".to_string());
    }
    if metadata.sponsor_info {
        columns.push("Sponsor URL".to_string());
    }
    match metadata.window {
        Some(window) => columns.push(format!(
            "Commits between {} and {}",
            window.since(),
            window.until()
        )),
        None => columns.push("All Commits".to_string()),
    }
    columns
}

fn table_header(metadata: &ReportMetadata) -> String {
    let columns = columns(metadata);
    format!(
        "| {} |\n| {} |\n",
        columns.join(" | "),
        vec!["---"; columns.len()].join(" | ")
    )
}

fn row(metadata: &ReportMetadata, contributor: &ContributorRecord) -> String {
    let mention = if metadata.link_to_profile { "@" } else { "" };
    let mut row = format!(
        "| {}{} | {} |",
        mention, contributor.username, contributor.contribution_count
    );

    if metadata.window.is_some() {
        row.push_str(&format!(" {} |", contributor.new_contributor));
    }
    if metadata.sponsor_info {
        if contributor.is_sponsorable() {
            row.push_str(&format!(" [Sponsor Link]({}) |", contributor.sponsor_info));
        } else {
            row.push_str(" not sponsorable |");
        }
    }

    let commits = if metadata.organization.is_some() {
        linked_commit_urls(&contributor.commit_url, &metadata.web_url)
    } else {
        contributor.commit_url.clone()
    };
    row.push_str(&format!(" {} |\n", commits));
    row
}

/// Turns `a, b` commit URLs into `[owner/name](a), [owner/name](b)`.
pub fn linked_commit_urls(commit_url: &str, web_url: &str) -> String {
    commit_url
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| format!("[{}]({})", repository_label(url, web_url), url))
        .collect::<Vec<_>>()
        .join(", ")
}

fn repository_label<'a>(url: &'a str, web_url: &str) -> &'a str {
    let path = url
        .strip_prefix(web_url.trim_end_matches('/'))
        .unwrap_or(url)
        .trim_start_matches('/');
    path.split("/commits").next().unwrap_or(path)
}
