//! Session-token handling: localStorage persistence, the institutional
//! mail-domain suffix, and unverified claim extraction for display.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::TokenClaims;

/// localStorage key the bearer token lives under.
pub const TOKEN_KEY: &str = "token";

/// Every account is an institute mail address; users type only the local
/// part and this suffix is appended before transmission.
pub const INSTITUTE_DOMAIN: &str = "@iitk.ac.in";

pub fn institutional_address(username: &str) -> String {
    format!("{username}{INSTITUTE_DOMAIN}")
}

/// Pulls the username claim out of a JWT. The signature is not checked:
/// the value is used for display and the `username` header only, and the
/// backend re-validates the token on every authenticated call.
pub fn claims_username(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.username)
}

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_family = "wasm")]
pub fn stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

#[cfg(target_family = "wasm")]
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(target_family = "wasm")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.fakesig")
    }

    #[test]
    fn address_gets_the_domain_exactly_once() {
        assert_eq!(institutional_address("rahul"), "rahul@iitk.ac.in");
        assert_eq!(
            institutional_address("rahul").matches(INSTITUTE_DOMAIN).count(),
            1
        );
    }

    #[test]
    fn username_claim_is_extracted() {
        let token = token_with_payload(r#"{"username":"rahul@iitk.ac.in","exp":1700000000}"#);
        assert_eq!(claims_username(&token).as_deref(), Some("rahul@iitk.ac.in"));
    }

    #[test]
    fn malformed_tokens_yield_none() {
        assert_eq!(claims_username(""), None);
        assert_eq!(claims_username("not-a-jwt"), None);
        assert_eq!(claims_username("a.!!!.c"), None);
        let no_claim = token_with_payload(r#"{"exp":1700000000}"#);
        assert_eq!(claims_username(&no_claim), None);
    }
}
