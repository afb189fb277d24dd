/// Prefix for environment overrides (`ABET__REGISTRY__PATH`, ...).
pub const ENV_PREFIX: &str = "ABET";
/// Separator between nested config keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Config file stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "antibet";
/// Default location of the authorization registry source.
pub const DEFAULT_REGISTRY_FILE: &str = "spa_authorized_list.json";
/// Top-level key of the registry source document.
pub const AUTHORIZED_DOMAINS_KEY: &str = "authorized_domains";
/// Host prefix ignored by registry lookups.
pub const WWW_PREFIX: &str = "www.";
/// Label prefix of IDNA-encoded (punycode) host labels.
pub const ACE_PREFIX: &str = "xn--";
/// Scheme assumed for verifier inputs without one.
pub const DEFAULT_SCHEME: &str = "http";
