#![doc = include_str!("../README.md")]

pub mod callback;
pub mod consent_url;
pub mod engine;
pub mod exchange;
pub mod oauth1;
pub mod output;
pub mod pkce;
pub mod provider;
pub mod providers;
pub mod refresh;
pub mod revoke;
pub mod session;
pub mod template;
pub mod transport;

// Re-exports
pub use engine::{
    CompleteFlowParams, ConsentRedirect, FlowOutcome, OAuth1CompleteParams, OAuth1StartParams,
    OAuthEngine, StartFlowParams,
};
pub use oauth1::OAuth1Spec;
pub use output::{CredentialResult, TOKEN_EXPIRY_KEY};
pub use provider::{
    CredentialInjection, OutputField, ProviderOAuthSpec, ScopeStyle, TokenRequestContentType,
};
pub use providers::{get_oauth1_spec, get_provider_spec, OAUTH1_PROVIDER_IDS, PROVIDER_IDS};
pub use refresh::RefreshTokenParams;
pub use revoke::RevokeTokenParams;
pub use session::OAuthSession;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
