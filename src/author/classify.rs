//! Classifies free-text author metadata into an explicit kind
//!
//! All substring probing happens here. The presenter only matches on
//! [`AuthorKind`].

use tracing::trace;

use crate::author::record::AuthorRecord;

const GITHUB_MARKER: &str = "github.com/";

/// What kind of identity information a record carries, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorKind<'a> {
    /// No record at all
    Unknown,
    /// `url` points at a GitHub profile
    GitHub { username: String },
    /// `url` is some other address without `@`
    ExternalLink { url: &'a str },
    /// An email, or an email-like value in the `url` field
    Contact { address: &'a str },
    /// Only a name (or nothing usable) is present
    PlainName,
}

pub fn classify(author: Option<&AuthorRecord>) -> AuthorKind<'_> {
    let Some(author) = author else {
        return AuthorKind::Unknown;
    };

    // Blank fields count as absent
    let url = author.url.as_deref().filter(|s| !s.is_empty());
    let email = author.email.as_deref().filter(|s| !s.is_empty());

    let kind = match (url, email) {
        (Some(url), _) if !url.contains('@') => match github_username(url) {
            Some(username) => AuthorKind::GitHub { username },
            None => AuthorKind::ExternalLink { url },
        },
        (_, Some(email)) => AuthorKind::Contact { address: email },
        // Registries sometimes carry the email in the url field
        (Some(url), None) => AuthorKind::Contact { address: url },
        (None, None) => AuthorKind::PlainName,
    };

    trace!("Classified author {:?} as {:?}", author.name, kind);
    kind
}

/// Extracts the username from a URL containing `github.com/`.
///
/// Takes the text between the first marker and the next one (if any) and
/// strips `<>()` from it.
fn github_username(url: &str) -> Option<String> {
    let (_, rest) = url.split_once(GITHUB_MARKER)?;
    let candidate = rest.split(GITHUB_MARKER).next().unwrap_or(rest);
    Some(candidate.replace(['<', '>', '(', ')'], ""))
}
