//! Picks the presentation variant for an author and derives its fields

use std::fmt;

use serde::Serialize;

use crate::author::UNKNOWN_LABEL;
use crate::author::avatar::{github_avatar_url, github_profile_url, gravatar_url};
use crate::author::classify::{AuthorKind, classify};
use crate::author::record::AuthorRecord;
use crate::author::sanitize::sanitize_name;

/// Presentation variant of an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Unknown,
    Github,
    ExternalLink,
    ContactCompact,
    ContactFull,
    PlainName,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Unknown => "unknown",
            Variant::Github => "github",
            Variant::ExternalLink => "external-link",
            Variant::ContactCompact => "contact-compact",
            Variant::ContactFull => "contact-full",
            Variant::PlainName => "plain-name",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image for an avatar component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// Target for a hyperlink component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    /// Open in a new browsing context
    pub new_context: bool,
}

/// Name and address shown on a contact card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: Option<String>,
    pub address: String,
}

/// Everything a UI needs to draw one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum RenderDescriptor {
    Unknown {
        label: String,
    },
    Github {
        link: Link,
        avatar: Avatar,
        /// Primary label
        username: String,
        /// Secondary label, the sanitized name
        #[serde(rename = "displayName")]
        display_name: Option<String>,
    },
    ExternalLink {
        link: Link,
        label: String,
    },
    /// Avatar only, details disclosed on hover or press
    ContactCompact {
        avatar: Avatar,
        disclosure: ContactDetails,
    },
    /// Avatar with inline details
    ContactFull {
        avatar: Avatar,
        details: ContactDetails,
    },
    PlainName {
        label: String,
    },
}

impl RenderDescriptor {
    pub fn variant(&self) -> Variant {
        match self {
            RenderDescriptor::Unknown { .. } => Variant::Unknown,
            RenderDescriptor::Github { .. } => Variant::Github,
            RenderDescriptor::ExternalLink { .. } => Variant::ExternalLink,
            RenderDescriptor::ContactCompact { .. } => Variant::ContactCompact,
            RenderDescriptor::ContactFull { .. } => Variant::ContactFull,
            RenderDescriptor::PlainName { .. } => Variant::PlainName,
        }
    }

    /// Primary text label of the descriptor
    pub fn label(&self) -> &str {
        match self {
            RenderDescriptor::Unknown { label }
            | RenderDescriptor::ExternalLink { label, .. }
            | RenderDescriptor::PlainName { label } => label,
            RenderDescriptor::Github { username, .. } => username,
            RenderDescriptor::ContactCompact {
                disclosure: details,
                ..
            }
            | RenderDescriptor::ContactFull { details, .. } => {
                details.name.as_deref().unwrap_or(UNKNOWN_LABEL)
            }
        }
    }

    /// Avatar image, for variants that show one
    pub fn avatar(&self) -> Option<&Avatar> {
        match self {
            RenderDescriptor::Github { avatar, .. }
            | RenderDescriptor::ContactCompact { avatar, .. }
            | RenderDescriptor::ContactFull { avatar, .. } => Some(avatar),
            _ => None,
        }
    }

    /// Link target, for variants that are clickable
    pub fn link(&self) -> Option<&Link> {
        match self {
            RenderDescriptor::Github { link, .. } | RenderDescriptor::ExternalLink { link, .. } => {
                Some(link)
            }
            _ => None,
        }
    }
}

/// Builds the presentation for an author, or for a missing one.
///
/// Never fails: every malformed or missing field degrades to a display-only
/// fallback.
pub fn present(author: Option<&AuthorRecord>, compact: bool) -> RenderDescriptor {
    let Some(author) = author else {
        return present_unknown();
    };

    match classify(Some(author)) {
        AuthorKind::Unknown => present_unknown(),
        AuthorKind::GitHub { username } => present_github(author, username),
        AuthorKind::ExternalLink { url } => present_external_link(author, url),
        AuthorKind::Contact { address } => present_contact(author, address, compact),
        AuthorKind::PlainName => present_plain_name(author),
    }
}

fn present_unknown() -> RenderDescriptor {
    RenderDescriptor::Unknown {
        label: UNKNOWN_LABEL.to_string(),
    }
}

fn present_github(author: &AuthorRecord, username: String) -> RenderDescriptor {
    RenderDescriptor::Github {
        link: Link {
            href: github_profile_url(&username),
            new_context: false,
        },
        avatar: Avatar {
            src: github_avatar_url(&username),
            alt: format!("{} avatar", username),
        },
        display_name: author.name.as_deref().map(sanitize_name),
        username,
    }
}

fn present_external_link(author: &AuthorRecord, url: &str) -> RenderDescriptor {
    RenderDescriptor::ExternalLink {
        link: Link {
            href: url.to_string(),
            new_context: true,
        },
        label: author
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
    }
}

fn present_contact(author: &AuthorRecord, address: &str, compact: bool) -> RenderDescriptor {
    let avatar = Avatar {
        src: gravatar_url(address),
        alt: format!(
            "{} avatar",
            author.name.as_deref().unwrap_or(UNKNOWN_LABEL)
        ),
    };
    let details = ContactDetails {
        name: author.name.clone(),
        address: address.to_string(),
    };

    if compact {
        RenderDescriptor::ContactCompact {
            avatar,
            disclosure: details,
        }
    } else {
        RenderDescriptor::ContactFull { avatar, details }
    }
}

fn present_plain_name(author: &AuthorRecord) -> RenderDescriptor {
    let label = author
        .name
        .as_deref()
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    RenderDescriptor::PlainName { label }
}
