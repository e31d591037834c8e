//! URL-safe tokens for rep ids in detail-view links.
//!
//! A token is the unpadded URL-safe base64 of the id's decimal string. Only
//! canonical decimal strings decode, so encoding is a bijection between ids
//! and valid tokens.

use crate::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

pub fn encode_rep_id(id: u64) -> String {
    URL_SAFE_NO_PAD.encode(id.to_string())
}

pub fn decode_rep_id(token: &str) -> Result<u64> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| Error::MalformedIdentity(format!("{}: {}", token, e)))?;
    let digits = std::str::from_utf8(&bytes)
        .map_err(|_| Error::MalformedIdentity(format!("{}: not text", token)))?;

    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !canonical {
        return Err(Error::MalformedIdentity(format!("{}: not a rep id", token)));
    }

    digits
        .parse()
        .map_err(|_| Error::MalformedIdentity(format!("{}: id out of range", token)))
}
