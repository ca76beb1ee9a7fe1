use super::record::ContributorRecord;

pub const INDEPENDENT: &str = "Independent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationBucket<'a> {
    pub name: String,
    pub contributors: Vec<&'a ContributorRecord>,
}

impl OrganizationBucket<'_> {
    pub fn is_independent(&self) -> bool {
        self.name == INDEPENDENT
    }
}

/// Partitions contributors by the preferred organisations they belong to.
///
/// A contributor joins every preferred organisation bucket it matches, or the
/// `Independent` bucket when it matches none. Buckets come out in the order
/// they were first needed.
pub fn group_by_organisation<'a>(
    contributors: &'a [ContributorRecord],
    preferred: &[String],
) -> Vec<OrganizationBucket<'a>> {
    let mut buckets: Vec<OrganizationBucket<'a>> = Vec::new();

    for contributor in contributors {
        let mut placed = false;
        for org in contributor
            .organisations
            .iter()
            .filter(|org| preferred.contains(org))
        {
            push_to(&mut buckets, org, contributor);
            placed = true;
        }

        if !placed {
            push_to(&mut buckets, INDEPENDENT, contributor);
        }
    }

    buckets
}

fn push_to<'a>(
    buckets: &mut Vec<OrganizationBucket<'a>>,
    name: &str,
    contributor: &'a ContributorRecord,
) {
    match buckets.iter_mut().find(|b| b.name == name) {
        Some(bucket) => bucket.contributors.push(contributor),
        None => buckets.push(OrganizationBucket {
            name: name.to_string(),
            contributors: vec![contributor],
        }),
    }
}
