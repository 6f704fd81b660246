//! Markdown rendering, one function per variant

use crate::author::UNKNOWN_LABEL;
use crate::author::presenter::{Avatar, ContactDetails, Link, RenderDescriptor};

pub fn render_markdown(descriptor: &RenderDescriptor) -> String {
    match descriptor {
        RenderDescriptor::Unknown { label } | RenderDescriptor::PlainName { label } => {
            escape_text(label)
        }
        RenderDescriptor::Github {
            link,
            avatar,
            username,
            display_name,
        } => render_github(link, avatar, username, display_name.as_deref()),
        RenderDescriptor::ExternalLink { link, label } => render_link(label, link),
        RenderDescriptor::ContactCompact { avatar, disclosure } => {
            render_contact_compact(avatar, disclosure)
        }
        RenderDescriptor::ContactFull { avatar, details } => render_contact_full(avatar, details),
    }
}

fn render_github(link: &Link, avatar: &Avatar, username: &str, name: Option<&str>) -> String {
    let href = escape_url(&link.href);
    let mut out = format!(
        "[{}]({}) [{}]({})",
        render_image(avatar, None),
        href,
        escape_text(username),
        href
    );
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        out.push_str(" · ");
        out.push_str(&escape_text(name));
    }
    out
}

fn render_link(label: &str, link: &Link) -> String {
    format!("[{}]({})", escape_text(label), escape_url(&link.href))
}

fn render_contact_compact(avatar: &Avatar, details: &ContactDetails) -> String {
    render_image(avatar, Some(&contact_line(details)))
}

fn render_contact_full(avatar: &Avatar, details: &ContactDetails) -> String {
    format!(
        "{} {}",
        render_image(avatar, None),
        escape_text(&contact_line(details))
    )
}

fn contact_line(details: &ContactDetails) -> String {
    format!(
        "{} <{}>",
        details.name.as_deref().unwrap_or(UNKNOWN_LABEL),
        details.address
    )
}

/// Image with an optional title, which Markdown viewers show on hover
fn render_image(avatar: &Avatar, title: Option<&str>) -> String {
    let src = escape_url(&avatar.src);
    match title {
        Some(title) => format!(
            "![{}]({} \"{}\")",
            escape_text(&avatar.alt),
            src,
            title.replace('"', "\\\"")
        ),
        None => format!("![{}]({})", escape_text(&avatar.alt), src),
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '!') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_url(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
}
