// Provider row types. One static row per provider drives the whole
// engine; adding a provider never means adding code.

/// How the scope list is joined and encoded into the consent URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeStyle {
    /// Join with a space and percent-encode the whole value (`%20`).
    #[default]
    SpaceEncoded,
    /// Join with a literal `%20`, items appended verbatim. For providers
    /// that reject any other encoding of their scope strings.
    SpaceRaw,
    /// Join with a literal `+`, items appended verbatim.
    PlusSeparated,
    /// Join with a literal `,`, items percent-encoded individually.
    CommaSeparated,
}

/// Where the client credentials go on the token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialInjection {
    /// Credentials as body fields, under the row's key names.
    #[default]
    Body,
    /// `Authorization: Basic base64(client_id:client_secret)` header;
    /// credentials never appear in the body.
    BasicAuthHeader,
}

/// Body encoding of the token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenRequestContentType {
    #[default]
    UrlEncoded,
    Json,
}

impl TokenRequestContentType {
    pub fn header_value(&self) -> &'static str {
        match self {
            TokenRequestContentType::UrlEncoded => "application/x-www-form-urlencoded",
            TokenRequestContentType::Json => "application/json",
        }
    }
}

/// One value to pull out of the provider's token response.
#[derive(Debug, Clone, Copy)]
pub struct OutputField {
    /// Key under which the value lands in the credential result.
    pub key: &'static str,
    /// Dot-separated lookup path into the response JSON, e.g.
    /// `data.access_token`.
    pub path: &'static str,
    /// Mandatory fields abort the flow when absent; optional ones are
    /// skipped silently.
    pub required: bool,
}

/// Declarative description of one provider's OAuth 2.0 dialect.
///
/// Endpoints may carry `{placeholder}` segments resolved from the
/// runtime input config (tenant ids, shop names, regional hosts).
#[derive(Debug, Clone, Copy)]
pub struct ProviderOAuthSpec {
    pub id: &'static str,
    pub name: &'static str,

    /// Consent screen the user is redirected to.
    pub consent_endpoint: &'static str,
    /// Endpoint the authorization code is exchanged against.
    pub token_endpoint: &'static str,

    pub scopes: &'static [&'static str],
    pub scope_style: ScopeStyle,
    /// Additional consent query parameters; values may carry
    /// `{placeholder}` segments.
    pub extra_consent_params: &'static [(&'static str, &'static str)],

    pub credential_injection: CredentialInjection,
    pub token_content_type: TokenRequestContentType,

    /// Attach a PKCE S256 challenge to the consent URL and the matching
    /// verifier to the token request.
    pub requires_pkce: bool,
    /// Round-trip the PKCE verifier itself as the state value instead of
    /// a fresh random string.
    pub verifier_as_state: bool,

    /// Redirect query parameter carrying the authorization code.
    pub code_param: &'static str,

    /// Name of the client id in the consent query and the token body.
    pub client_id_key: &'static str,
    /// Name of the client secret in the token body.
    pub client_secret_key: &'static str,
    /// Name of the authorization code in the token body.
    pub token_code_key: &'static str,

    /// What to extract from the token response.
    pub output_fields: &'static [OutputField],
    /// Where the relative `expires_in` seconds live, when the provider
    /// reports token lifetime.
    pub expires_in_path: Option<&'static str>,

    /// Redirect query parameters copied verbatim into the credential
    /// result (e.g. QuickBooks `realmId`).
    pub callback_output_params: &'static [&'static str],

    /// Provider error codes that end the flow without credentials but
    /// are not failures (the user declined consent).
    pub ignorable_errors: &'static [&'static str],

    /// Token revocation endpoint, for providers that offer one.
    pub revocation_endpoint: Option<&'static str>,
}

/// Default extraction: a mandatory long-lived refresh token plus an
/// optional short-lived access token.
pub const DEFAULT_OUTPUT_FIELDS: &[OutputField] = &[
    OutputField {
        key: "refresh_token",
        path: "refresh_token",
        required: true,
    },
    OutputField {
        key: "access_token",
        path: "access_token",
        required: false,
    },
];

/// Extraction for providers that only ever issue an access token.
pub const ACCESS_TOKEN_ONLY: &[OutputField] = &[OutputField {
    key: "access_token",
    path: "access_token",
    required: true,
}];

/// Error codes every provider is allowed to answer with when the user
/// backs out of the consent screen.
pub const DEFAULT_IGNORABLE_ERRORS: &[&str] = &["access_denied"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_header_values() {
        assert_eq!(
            TokenRequestContentType::UrlEncoded.header_value(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            TokenRequestContentType::Json.header_value(),
            "application/json"
        );
    }

    #[test]
    fn test_default_output_fields() {
        assert!(DEFAULT_OUTPUT_FIELDS
            .iter()
            .any(|f| f.key == "refresh_token" && f.required));
        assert!(DEFAULT_OUTPUT_FIELDS
            .iter()
            .any(|f| f.key == "access_token" && !f.required));
    }
}
