use std::collections::HashMap;

use super::record::ContributorRecord;

/// Folds per-repository lists into one list keyed by username.
///
/// First appearance decides position. Duplicates add their counts, append
/// their commit links with `", "` and OR their new-contributor flag.
pub fn merge_contributors(lists: Vec<Vec<ContributorRecord>>) -> Vec<ContributorRecord> {
    let mut merged: Vec<ContributorRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in lists.into_iter().flatten() {
        match positions.get(&record.username) {
            Some(&idx) => absorb(&mut merged[idx], record),
            None => {
                positions.insert(record.username.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

fn absorb(acc: &mut ContributorRecord, incoming: ContributorRecord) {
    acc.contribution_count += incoming.contribution_count;
    acc.commit_url = format!("{}, {}", acc.commit_url, incoming.commit_url);
    acc.new_contributor = acc.new_contributor || incoming.new_contributor;

    // co-author rows carry no avatar or affiliation
    if acc.avatar_url.is_empty() {
        acc.avatar_url = incoming.avatar_url;
    }
    for org in incoming.organisations {
        if !acc.organisations.contains(&org) {
            acc.organisations.push(org);
        }
    }
}
