use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;

const B64: base64::engine::GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Issues an expiring session token: `base64(email|expiry) . base64(mac)`
/// with an HMAC-SHA1 over the payload. Stateless on purpose; there is one
/// admin and nothing to revoke server-side before expiry.
pub fn issue_token(secret: &str, email: &str, ttl_minutes: i64) -> String {
    let expires = Utc::now().timestamp() + ttl_minutes * 60;
    let payload = format!("{email}|{expires}");
    let mac = sign(secret, &payload);
    format!("{}.{}", B64.encode(payload.as_bytes()), B64.encode(mac))
}

pub fn verify_token(secret: &str, token: &str) -> bool {
    let Some((payload_b64, mac_b64)) = token.split_once('.') else {
        return false;
    };
    let Ok(payload_bytes) = B64.decode(payload_b64) else {
        return false;
    };
    let Ok(payload) = String::from_utf8(payload_bytes) else {
        return false;
    };
    let Ok(mac) = B64.decode(mac_b64) else {
        return false;
    };

    if sign(secret, &payload) != mac {
        return false;
    }

    let Some((_, expires)) = payload.rsplit_once('|') else {
        return false;
    };
    match expires.parse::<i64>() {
        Ok(ts) => ts > Utc::now().timestamp(),
        Err(_) => false,
    }
}

fn sign(secret: &str, payload: &str) -> Vec<u8> {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(payload.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let token = issue_token("secret", "admin@example.com", 60);
        assert!(verify_token("secret", &token));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token("secret", "admin@example.com", 60);
        assert!(!verify_token("other", &token));
    }

    #[test]
    fn test_expired_rejected() {
        let token = issue_token("secret", "admin@example.com", -1);
        assert!(!verify_token("secret", &token));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!verify_token("secret", ""));
        assert!(!verify_token("secret", "not-a-token"));
        assert!(!verify_token("secret", "aaaa.bbbb"));
    }
}
