//! Co-author trailer parsing.
//!
//! Commit messages may credit additional authors with trailers such as
//! `Co-authored-by: Jane <12345+jane@users.noreply.github.com>`. Parsing is a
//! pure function over the message text; resolving arbitrary emails to logins
//! is left to the collector.

use std::collections::HashMap;

use lazy_regex::{lazy_regex, Lazy, Regex};

use super::record::is_bot;

static TRAILER_REGEX: Lazy<Regex> =
    lazy_regex!(r"(?im)^[ \t]*co-authored-by:[ \t]*(?P<name>[^<\r\n]*?)[ \t]*<(?P<email>[^<>\s]+)>[ \t]*\r?$");

static NOREPLY_REGEX: Lazy<Regex> =
    lazy_regex!(r"^(?:\d+\+)?(?P<user>[^@+]+)@users\.noreply\.[^@]+$");

/// Email addresses named in `Co-authored-by` trailers, in order of appearance.
pub fn trailer_emails(message: &str) -> Vec<&str> {
    TRAILER_REGEX
        .captures_iter(message)
        .filter_map(|caps| caps.name("email").map(|m| m.as_str()))
        .collect()
}

/// Username embedded in a no-reply alias, if `email` is one.
pub fn noreply_username(email: &str) -> Option<&str> {
    NOREPLY_REGEX
        .captures(email)
        .and_then(|caps| caps.name("user"))
        .map(|m| m.as_str())
}

/// Identifier for one co-author email: the embedded username for no-reply
/// aliases, the raw email otherwise.
pub fn identify(email: &str) -> &str {
    noreply_username(email).unwrap_or(email)
}

/// Contributor identifiers named in a commit message's co-author trailers.
///
/// Duplicates within one message are kept. Messages without trailers yield an
/// empty list.
pub fn coauthor_identifiers(message: &str) -> Vec<String> {
    trailer_emails(message)
        .into_iter()
        .map(|email| identify(email).to_string())
        .collect()
}

/// Occurrence counts per identifier across many commits, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoauthorTally {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl CoauthorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence. Bot identities are ignored.
    pub fn record(&mut self, identifier: &str) {
        if is_bot(identifier) {
            return;
        }

        match self.counts.get_mut(identifier) {
            Some(count) => *count += 1,
            None => {
                self.order.push(identifier.to_string());
                self.counts.insert(identifier.to_string(), 1);
            }
        }
    }

    pub fn into_counts(self) -> Vec<(String, u64)> {
        let CoauthorTally { order, counts } = self;
        order
            .into_iter()
            .map(|identifier| {
                let count = counts.get(&identifier).copied().unwrap_or(0);
                (identifier, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noreply_and_plain_emails() {
        let message = "Co-authored-by: A <12345+alice@users.noreply.github.com>\nCo-authored-by: B <bob@example.com>";
        assert_eq!(coauthor_identifiers(message), vec!["alice", "bob@example.com"]);
    }

    #[test]
    fn test_trailer_keyword_is_case_insensitive() {
        let message = "fix parser\n\nCO-AUTHORED-BY: Carol <carol@example.com>\nco-authored-by: Dan <dan@example.com>";
        assert_eq!(
            coauthor_identifiers(message),
            vec!["carol@example.com", "dan@example.com"]
        );
    }

    #[test]
    fn test_noreply_without_numeric_id() {
        assert_eq!(identify("octocat@users.noreply.github.com"), "octocat");
        assert_eq!(identify("1+octocat@users.noreply.ghe.example.com"), "octocat");
    }

    #[test]
    fn test_numeric_prefix_kept_for_regular_emails() {
        assert_eq!(identify("12345+alice@example.com"), "12345+alice@example.com");
    }

    #[test]
    fn test_empty_and_trailer_free_messages() {
        assert!(coauthor_identifiers("").is_empty());
        assert!(coauthor_identifiers("Initial commit\n\nSigned-off-by: A <a@b.c>").is_empty());
    }

    #[test]
    fn test_trailer_must_start_a_line() {
        let message = "mention Co-authored-by: A <a@example.com> inline";
        assert!(coauthor_identifiers(message).is_empty());
    }

    #[test]
    fn test_duplicates_within_message_are_kept() {
        let message = "x\n\nCo-authored-by: A <a@example.com>\nCo-authored-by: A <a@example.com>";
        assert_eq!(coauthor_identifiers(message).len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let message = "x\r\n\r\nCo-authored-by: A <1+alice@users.noreply.github.com>\r\n";
        assert_eq!(coauthor_identifiers(message), vec!["alice"]);
    }

    #[test]
    fn test_tally_counts_across_messages_in_first_seen_order() {
        let mut tally = CoauthorTally::new();
        for message in [
            "a\n\nCo-authored-by: B <bob@example.com>",
            "b\n\nCo-authored-by: A <1+alice@users.noreply.github.com>",
            "c\n\nCo-authored-by: B <bob@example.com>",
        ] {
            for identifier in coauthor_identifiers(message) {
                tally.record(&identifier);
            }
        }

        assert_eq!(
            tally.into_counts(),
            vec![("bob@example.com".to_string(), 2), ("alice".to_string(), 1)]
        );
    }

    #[test]
    fn test_tally_skips_bots() {
        let mut tally = CoauthorTally::new();
        tally.record("dependabot[bot]");
        tally.record("alice");
        assert_eq!(tally.into_counts(), vec![("alice".to_string(), 1)]);
    }
}
