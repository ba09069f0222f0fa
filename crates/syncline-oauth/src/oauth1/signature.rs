// HMAC-SHA1 request signing (RFC 5849 section 3.4).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use syncline_core::{Result, SynclineError};
use urlencoding::encode;

/// Compute the `oauth_signature` for a request.
///
/// `params` are the unencoded protocol parameters; `url` must carry no
/// query string (query parameters belong in `params`). The token secret
/// is empty while requesting temporary credentials.
pub(crate) fn sign(
    method: &str,
    url: &str,
    params: &[(String, String)],
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String> {
    // Parameters are sorted by encoded name, then encoded value.
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned()))
        .collect();
    encoded.sort();
    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let base = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&normalized)
    );
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));

    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .map_err(|e| SynclineError::Configuration(format!("HMAC-SHA1 key setup failed: {e}")))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Render the signed parameters as an `Authorization: OAuth ...` header
/// value (RFC 5849 section 3.5.1).
pub(crate) fn authorization_header(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();
    let rendered = sorted
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {rendered}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_known_hmac_sha1_vector() {
        // The worked example from Twitter's OAuth 1.0a signing guide.
        let params = owned(&[
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ("include_entities", "true"),
            ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
            ("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1318622958"),
            ("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            ("oauth_version", "1.0"),
        ]);
        let signature = sign(
            "POST",
            "https://api.twitter.com/1/statuses/update.json",
            &params,
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
        .unwrap();
        assert_eq!(signature, "tnnArxj06cWHq44gCs1OSKk/jLY=");
    }

    #[test]
    fn test_signature_depends_on_token_secret() {
        let params = owned(&[("oauth_consumer_key", "key")]);
        let with_secret = sign("POST", "https://x.test/access", &params, "cs", "ts").unwrap();
        let without_secret = sign("POST", "https://x.test/access", &params, "cs", "").unwrap();
        assert_ne!(with_secret, without_secret);
    }

    #[test]
    fn test_authorization_header_rendering() {
        let params = owned(&[
            ("oauth_token", "tok/en"),
            ("oauth_consumer_key", "key"),
        ]);
        let header = authorization_header(&params);
        assert!(header.starts_with("OAuth "));
        // Sorted, quoted, percent-encoded values.
        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"key\", oauth_token=\"tok%2Fen\""
        );
    }
}
