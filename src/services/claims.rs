/*
 * Responsibility
 * - unverified JWT payload decode (test-double semantics)
 * - NO signature or expiry validation, ever: this crate is a test stub
 *   and must never back a real trust decision
 */
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use thiserror::Error;

/// Opaque decode failure. Malformed structure, bad base64 and invalid
/// JSON are all collapsed into this one value so callers cannot (and do
/// not) distinguish the sub-cases.
#[derive(Debug, Error)]
#[error("token payload could not be decoded")]
pub struct DecodeError;

/// Decode the payload segment of `token` without verifying anything.
///
/// The token must have exactly three dot-delimited segments (the third
/// may be empty, as with `alg: none` tokens) and the middle segment must
/// be base64url-encoded JSON object.
pub fn decode_unverified(token: &str) -> Result<Map<String, Value>, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError);
    }

    // Tokens in the wild sometimes carry padding; tolerate it.
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| DecodeError)?;

    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(claims)) => Ok(claims),
        _ => Err(DecodeError),
    }
}
