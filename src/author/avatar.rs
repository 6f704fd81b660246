//! Address builders for profile links and avatar images

use sha2::{Digest, Sha256};

const GITHUB_BASE_URL: &str = "https://github.com";
const GRAVATAR_BASE_URL: &str = "https://gravatar.com/avatar";

/// Identicon style served when no gravatar is registered for the address
const GRAVATAR_DEFAULT_IMAGE: &str = "retro";

pub fn github_profile_url(username: &str) -> String {
    format!("{}/{}", GITHUB_BASE_URL, username)
}

pub fn github_avatar_url(username: &str) -> String {
    format!("{}/{}.png", GITHUB_BASE_URL, username)
}

/// Gravatar image address keyed by the SHA-256 of the contact address.
/// The address is hashed exactly as given.
pub fn gravatar_url(address: &str) -> String {
    format!(
        "{}/{}?d={}",
        GRAVATAR_BASE_URL,
        sha256_hex(address),
        GRAVATAR_DEFAULT_IMAGE
    )
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
