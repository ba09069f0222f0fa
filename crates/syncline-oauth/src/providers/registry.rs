// Provider registry. Each row captures one provider's OAuth dialect as
// static data; the engine in this crate is the only code that reads it.
// Adding a provider means adding a row here and nothing else.

use crate::oauth1::OAuth1Spec;
use crate::provider::{
    CredentialInjection, OutputField, ProviderOAuthSpec, ScopeStyle, TokenRequestContentType,
    ACCESS_TOKEN_ONLY, DEFAULT_IGNORABLE_ERRORS, DEFAULT_OUTPUT_FIELDS,
};

/// Both tokens mandatory.
const TOKEN_PAIR: &[OutputField] = &[
    OutputField {
        key: "access_token",
        path: "access_token",
        required: true,
    },
    OutputField {
        key: "refresh_token",
        path: "refresh_token",
        required: true,
    },
];

/// Baseline row: standard code flow, form-encoded token request,
/// credentials in the body, space-joined scopes, `code` callback
/// parameter, refresh-token output. Rows list only their deviations.
const BASE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "",
    name: "",
    consent_endpoint: "",
    token_endpoint: "",
    scopes: &[],
    scope_style: ScopeStyle::SpaceEncoded,
    extra_consent_params: &[],
    credential_injection: CredentialInjection::Body,
    token_content_type: TokenRequestContentType::UrlEncoded,
    requires_pkce: false,
    verifier_as_state: false,
    code_param: "code",
    client_id_key: "client_id",
    client_secret_key: "client_secret",
    token_code_key: "code",
    output_fields: DEFAULT_OUTPUT_FIELDS,
    expires_in_path: None,
    callback_output_params: &[],
    ignorable_errors: DEFAULT_IGNORABLE_ERRORS,
    revocation_endpoint: None,
};

// ============================================================
// Provider rows (35 OAuth 2.0 dialects)
// ============================================================

// --- Airtable ---
pub static AIRTABLE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "airtable",
    name: "Airtable",
    consent_endpoint: "https://airtable.com/oauth2/v1/authorize",
    token_endpoint: "https://airtable.com/oauth2/v1/token",
    scopes: &["data.records:read", "data.records:write", "schema.bases:read"],
    credential_injection: CredentialInjection::BasicAuthHeader,
    requires_pkce: true,
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Amazon Ads ---
pub static AMAZON_ADS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "amazon-ads",
    name: "Amazon Ads",
    consent_endpoint: "https://www.amazon.com/ap/oa",
    token_endpoint: "https://api.amazon.com/auth/o2/token",
    scopes: &["advertising::campaign_management"],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Amazon Seller Partner ---
pub static AMAZON_SELLER_PARTNER: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "amazon-seller-partner",
    name: "Amazon Seller Partner",
    consent_endpoint: "https://sellercentral.amazon.com/apps/authorize/consent",
    token_endpoint: "https://api.amazon.com/auth/o2/token",
    extra_consent_params: &[("application_id", "{application_id}"), ("version", "beta")],
    code_param: "spapi_oauth_code",
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Asana ---
pub static ASANA: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "asana",
    name: "Asana",
    consent_endpoint: "https://app.asana.com/-/oauth_authorize",
    token_endpoint: "https://app.asana.com/-/oauth_token",
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Azure Blob Storage ---
pub static AZURE_BLOB_STORAGE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "azure-blob-storage",
    name: "Azure Blob Storage",
    consent_endpoint: "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/authorize",
    token_endpoint: "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token",
    scopes: &["offline_access", "https://storage.azure.com/user_impersonation"],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Drift ---
pub static DRIFT: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "drift",
    name: "Drift",
    consent_endpoint: "https://dev.drift.com/authorize",
    token_endpoint: "https://driftapi.com/oauth2/token",
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Facebook Marketing ---
pub static FACEBOOK_MARKETING: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "facebook-marketing",
    name: "Facebook Marketing",
    consent_endpoint: "https://www.facebook.com/v21.0/dialog/oauth",
    token_endpoint: "https://graph.facebook.com/v21.0/oauth/access_token",
    scopes: &[
        "ads_management",
        "ads_read",
        "read_insights",
        "business_management",
    ],
    scope_style: ScopeStyle::CommaSeparated,
    output_fields: ACCESS_TOKEN_ONLY,
    expires_in_path: Some("expires_in"),
    ignorable_errors: &["access_denied", "user_denied"],
    ..BASE
};

// --- GitHub ---
pub static GITHUB: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "github",
    name: "GitHub",
    consent_endpoint: "https://github.com/login/oauth/authorize",
    token_endpoint: "https://github.com/login/oauth/access_token",
    scopes: &[
        "repo",
        "read:org",
        "read:repo_hook",
        "read:user",
        "read:discussion",
        "workflow",
    ],
    scope_style: ScopeStyle::SpaceRaw,
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- GitLab ---
pub static GITLAB: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "gitlab",
    name: "GitLab",
    consent_endpoint: "https://gitlab.com/oauth/authorize",
    token_endpoint: "https://gitlab.com/oauth/token",
    scopes: &["read_api"],
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    revocation_endpoint: Some("https://gitlab.com/oauth/revoke"),
    ..BASE
};

// --- Google Ads ---
pub static GOOGLE_ADS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "google-ads",
    name: "Google Ads",
    consent_endpoint: "https://accounts.google.com/o/oauth2/v2/auth",
    token_endpoint: "https://oauth2.googleapis.com/token",
    scopes: &["https://www.googleapis.com/auth/adwords"],
    extra_consent_params: &[
        ("access_type", "offline"),
        ("include_granted_scopes", "true"),
        ("prompt", "consent"),
    ],
    expires_in_path: Some("expires_in"),
    revocation_endpoint: Some("https://oauth2.googleapis.com/revoke"),
    ..BASE
};

// --- Harvest ---
pub static HARVEST: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "harvest",
    name: "Harvest",
    consent_endpoint: "https://id.getharvest.com/oauth2/authorize",
    token_endpoint: "https://id.getharvest.com/api/v2/oauth2/token",
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- HubSpot ---
pub static HUBSPOT: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "hubspot",
    name: "HubSpot",
    consent_endpoint: "https://app.hubspot.com/oauth/authorize",
    token_endpoint: "https://api.hubapi.com/oauth/v1/token",
    scopes: &[
        "crm.objects.contacts.read",
        "crm.schemas.contacts.read",
        "content",
        "forms",
        "tickets",
    ],
    output_fields: TOKEN_PAIR,
    ..BASE
};

// --- Intercom ---
pub static INTERCOM: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "intercom",
    name: "Intercom",
    consent_endpoint: "https://app.intercom.com/oauth",
    token_endpoint: "https://api.intercom.io/auth/eagle/token",
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Lever Hiring ---
pub static LEVER_HIRING: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "lever-hiring",
    name: "Lever Hiring",
    consent_endpoint: "https://auth.lever.co/authorize",
    token_endpoint: "https://auth.lever.co/oauth/token",
    scopes: &["offline_access", "opportunities:read:admin"],
    extra_consent_params: &[("audience", "https://api.lever.co/v1/")],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- LinkedIn Ads ---
pub static LINKEDIN_ADS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "linkedin-ads",
    name: "LinkedIn Ads",
    consent_endpoint: "https://www.linkedin.com/oauth/v2/authorization",
    token_endpoint: "https://www.linkedin.com/oauth/v2/accessToken",
    scopes: &["r_ads", "r_ads_reporting", "r_organization_social"],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Mailchimp ---
pub static MAILCHIMP: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "mailchimp",
    name: "Mailchimp",
    consent_endpoint: "https://login.mailchimp.com/oauth2/authorize",
    token_endpoint: "https://login.mailchimp.com/oauth2/token",
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Microsoft Teams ---
pub static MICROSOFT_TEAMS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "microsoft-teams",
    name: "Microsoft Teams",
    consent_endpoint: "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/authorize",
    token_endpoint: "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token",
    scopes: &[
        "offline_access",
        "Channel.ReadBasic.All",
        "ChannelMember.Read.All",
        "Team.ReadBasic.All",
        "User.Read.All",
    ],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Monday ---
pub static MONDAY: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "monday",
    name: "Monday",
    consent_endpoint: "https://auth.monday.com/oauth2/authorize",
    token_endpoint: "https://auth.monday.com/oauth2/token",
    scopes: &[
        "me:read",
        "boards:read",
        "workspaces:read",
        "users:read",
        "updates:read",
    ],
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Notion ---
pub static NOTION: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "notion",
    name: "Notion",
    consent_endpoint: "https://api.notion.com/v1/oauth/authorize",
    token_endpoint: "https://api.notion.com/v1/oauth/token",
    extra_consent_params: &[("owner", "user")],
    credential_injection: CredentialInjection::BasicAuthHeader,
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Okta ---
pub static OKTA: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "okta",
    name: "Okta",
    consent_endpoint: "https://{domain}/oauth2/v1/authorize",
    token_endpoint: "https://{domain}/oauth2/v1/token",
    scopes: &[
        "okta.users.read",
        "okta.logs.read",
        "okta.roles.read",
        "offline_access",
    ],
    credential_injection: CredentialInjection::BasicAuthHeader,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- PayPal Transaction ---
pub static PAYPAL_TRANSACTION: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "paypal-transaction",
    name: "PayPal Transaction",
    consent_endpoint: "https://www.paypal.com/signin/authorize",
    token_endpoint: "https://api-m.paypal.com/v1/oauth2/token",
    scopes: &["openid", "email", "profile"],
    credential_injection: CredentialInjection::BasicAuthHeader,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Pinterest ---
pub static PINTEREST: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "pinterest",
    name: "Pinterest",
    consent_endpoint: "https://www.pinterest.com/oauth",
    token_endpoint: "https://api.pinterest.com/v5/oauth/token",
    scopes: &["ads:read", "boards:read", "pins:read", "user_accounts:read"],
    scope_style: ScopeStyle::CommaSeparated,
    credential_injection: CredentialInjection::BasicAuthHeader,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- QuickBooks ---
pub static QUICKBOOKS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "quickbooks",
    name: "QuickBooks",
    consent_endpoint: "https://appcenter.intuit.com/connect/oauth2",
    token_endpoint: "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer",
    scopes: &["com.intuit.quickbooks.accounting"],
    credential_injection: CredentialInjection::BasicAuthHeader,
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    callback_output_params: &["realmId"],
    ..BASE
};

// --- Salesforce ---
pub static SALESFORCE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "salesforce",
    name: "Salesforce",
    consent_endpoint: "https://{environment}.salesforce.com/services/oauth2/authorize",
    token_endpoint: "https://{environment}.salesforce.com/services/oauth2/token",
    scopes: &["api", "refresh_token"],
    revocation_endpoint: Some("https://{environment}.salesforce.com/services/oauth2/revoke"),
    ..BASE
};

// --- Shopify ---
pub static SHOPIFY: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "shopify",
    name: "Shopify",
    consent_endpoint: "https://{shop}.myshopify.com/admin/oauth/authorize",
    token_endpoint: "https://{shop}.myshopify.com/admin/oauth/access_token",
    scopes: &[
        "read_orders",
        "read_all_orders",
        "read_checkouts",
        "read_products",
        "read_customers",
    ],
    scope_style: ScopeStyle::CommaSeparated,
    output_fields: ACCESS_TOKEN_ONLY,
    callback_output_params: &["shop"],
    ..BASE
};

// --- Slack ---
pub static SLACK: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "slack",
    name: "Slack",
    consent_endpoint: "https://slack.com/oauth/authorize",
    token_endpoint: "https://slack.com/api/oauth.access",
    scopes: &[
        "channels:history",
        "channels:read",
        "groups:history",
        "groups:read",
        "im:history",
        "mpim:history",
        "users:read",
    ],
    scope_style: ScopeStyle::CommaSeparated,
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- Smartsheets ---
pub static SMARTSHEETS: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "smartsheets",
    name: "Smartsheets",
    consent_endpoint: "https://app.smartsheet.com/b/authorize",
    token_endpoint: "https://api.smartsheet.com/2.0/token",
    scopes: &["READ_SHEETS"],
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Snapchat Marketing ---
pub static SNAPCHAT_MARKETING: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "snapchat-marketing",
    name: "Snapchat Marketing",
    consent_endpoint: "https://accounts.snapchat.com/login/oauth2/authorize",
    token_endpoint: "https://accounts.snapchat.com/login/oauth2/access_token",
    scopes: &["snapchat-marketing-api"],
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Snowflake ---
pub static SNOWFLAKE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "snowflake",
    name: "Snowflake",
    consent_endpoint: "https://{host}/oauth/authorize",
    token_endpoint: "https://{host}/oauth/token-request",
    extra_consent_params: &[("scope", "session:role:{role}")],
    credential_injection: CredentialInjection::BasicAuthHeader,
    output_fields: &[
        OutputField {
            key: "access_token",
            path: "access_token",
            required: true,
        },
        OutputField {
            key: "refresh_token",
            path: "refresh_token",
            required: true,
        },
        OutputField {
            key: "username",
            path: "username",
            required: false,
        },
    ],
    ..BASE
};

// --- Square ---
pub static SQUARE: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "square",
    name: "Square",
    consent_endpoint: "https://connect.squareup.com/oauth2/authorize",
    token_endpoint: "https://connect.squareup.com/oauth2/token",
    scopes: &[
        "ITEMS_READ",
        "MERCHANT_PROFILE_READ",
        "PAYMENTS_READ",
        "ORDERS_READ",
        "CUSTOMERS_READ",
    ],
    scope_style: ScopeStyle::PlusSeparated,
    token_content_type: TokenRequestContentType::Json,
    output_fields: &[
        OutputField {
            key: "access_token",
            path: "access_token",
            required: true,
        },
        OutputField {
            key: "refresh_token",
            path: "refresh_token",
            required: true,
        },
        // Square reports an absolute expiry itself.
        OutputField {
            key: "token_expiry_date",
            path: "expires_at",
            required: false,
        },
    ],
    revocation_endpoint: Some("https://connect.squareup.com/oauth2/revoke"),
    ..BASE
};

// --- Strava ---
pub static STRAVA: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "strava",
    name: "Strava",
    consent_endpoint: "https://www.strava.com/oauth/authorize",
    token_endpoint: "https://www.strava.com/oauth/token",
    scopes: &["activity:read_all"],
    scope_style: ScopeStyle::CommaSeparated,
    extra_consent_params: &[("approval_prompt", "auto")],
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    revocation_endpoint: Some("https://www.strava.com/oauth/deauthorize"),
    ..BASE
};

// --- SurveyMonkey ---
pub static SURVEYMONKEY: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "surveymonkey",
    name: "SurveyMonkey",
    consent_endpoint: "https://{origin}/oauth/authorize",
    token_endpoint: "https://{origin}/oauth/token",
    scopes: &["responses_read_detail", "surveys_read", "users_read"],
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// --- TikTok Marketing ---
pub static TIKTOK_MARKETING: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "tiktok-marketing",
    name: "TikTok Marketing",
    consent_endpoint: "https://business-api.tiktok.com/portal/auth",
    token_endpoint: "https://business-api.tiktok.com/open_api/v1.3/oauth2/access_token/",
    token_content_type: TokenRequestContentType::Json,
    code_param: "auth_code",
    client_id_key: "app_id",
    client_secret_key: "secret",
    token_code_key: "auth_code",
    output_fields: &[OutputField {
        key: "access_token",
        path: "data.access_token",
        required: true,
    }],
    ..BASE
};

// --- Typeform ---
pub static TYPEFORM: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "typeform",
    name: "Typeform",
    consent_endpoint: "https://api.typeform.com/oauth/authorize",
    token_endpoint: "https://api.typeform.com/oauth/token",
    scopes: &["forms:read", "responses:read", "offline"],
    scope_style: ScopeStyle::PlusSeparated,
    output_fields: TOKEN_PAIR,
    expires_in_path: Some("expires_in"),
    ..BASE
};

// --- Zendesk Support ---
pub static ZENDESK_SUPPORT: ProviderOAuthSpec = ProviderOAuthSpec {
    id: "zendesk-support",
    name: "Zendesk Support",
    consent_endpoint: "https://{subdomain}.zendesk.com/oauth/authorizations/new",
    token_endpoint: "https://{subdomain}.zendesk.com/oauth/tokens",
    scopes: &["read"],
    output_fields: ACCESS_TOKEN_ONLY,
    ..BASE
};

// ============================================================
// OAuth 1.0a rows
// ============================================================

// --- Trello ---
pub static TRELLO: OAuth1Spec = OAuth1Spec {
    id: "trello",
    name: "Trello",
    request_token_endpoint: "https://trello.com/1/OAuthGetRequestToken",
    authorize_endpoint: "https://trello.com/1/OAuthAuthorizeToken",
    access_token_endpoint: "https://trello.com/1/OAuthGetAccessToken",
    extra_authorize_params: &[("expiration", "never"), ("scope", "read,write")],
};

/// Look up an OAuth 2.0 row by provider id.
pub fn get_provider_spec(id: &str) -> Option<&'static ProviderOAuthSpec> {
    match id {
        "airtable" => Some(&AIRTABLE),
        "amazon-ads" => Some(&AMAZON_ADS),
        "amazon-seller-partner" => Some(&AMAZON_SELLER_PARTNER),
        "asana" => Some(&ASANA),
        "azure-blob-storage" => Some(&AZURE_BLOB_STORAGE),
        "drift" => Some(&DRIFT),
        "facebook-marketing" => Some(&FACEBOOK_MARKETING),
        "github" => Some(&GITHUB),
        "gitlab" => Some(&GITLAB),
        "google-ads" => Some(&GOOGLE_ADS),
        "harvest" => Some(&HARVEST),
        "hubspot" => Some(&HUBSPOT),
        "intercom" => Some(&INTERCOM),
        "lever-hiring" => Some(&LEVER_HIRING),
        "linkedin-ads" => Some(&LINKEDIN_ADS),
        "mailchimp" => Some(&MAILCHIMP),
        "microsoft-teams" => Some(&MICROSOFT_TEAMS),
        "monday" => Some(&MONDAY),
        "notion" => Some(&NOTION),
        "okta" => Some(&OKTA),
        "paypal-transaction" => Some(&PAYPAL_TRANSACTION),
        "pinterest" => Some(&PINTEREST),
        "quickbooks" => Some(&QUICKBOOKS),
        "salesforce" => Some(&SALESFORCE),
        "shopify" => Some(&SHOPIFY),
        "slack" => Some(&SLACK),
        "smartsheets" => Some(&SMARTSHEETS),
        "snapchat-marketing" => Some(&SNAPCHAT_MARKETING),
        "snowflake" => Some(&SNOWFLAKE),
        "square" => Some(&SQUARE),
        "strava" => Some(&STRAVA),
        "surveymonkey" => Some(&SURVEYMONKEY),
        "tiktok-marketing" => Some(&TIKTOK_MARKETING),
        "typeform" => Some(&TYPEFORM),
        "zendesk-support" => Some(&ZENDESK_SUPPORT),
        _ => None,
    }
}

/// Look up an OAuth 1.0a row by provider id.
pub fn get_oauth1_spec(id: &str) -> Option<&'static OAuth1Spec> {
    match id {
        "trello" => Some(&TRELLO),
        _ => None,
    }
}

/// All registered OAuth 2.0 provider ids.
pub const PROVIDER_IDS: &[&str] = &[
    "airtable",
    "amazon-ads",
    "amazon-seller-partner",
    "asana",
    "azure-blob-storage",
    "drift",
    "facebook-marketing",
    "github",
    "gitlab",
    "google-ads",
    "harvest",
    "hubspot",
    "intercom",
    "lever-hiring",
    "linkedin-ads",
    "mailchimp",
    "microsoft-teams",
    "monday",
    "notion",
    "okta",
    "paypal-transaction",
    "pinterest",
    "quickbooks",
    "salesforce",
    "shopify",
    "slack",
    "smartsheets",
    "snapchat-marketing",
    "snowflake",
    "square",
    "strava",
    "surveymonkey",
    "tiktok-marketing",
    "typeform",
    "zendesk-support",
];

/// All registered OAuth 1.0a provider ids.
pub const OAUTH1_PROVIDER_IDS: &[&str] = &["trello"];
