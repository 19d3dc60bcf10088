/// Configuration constants for the control plane API
pub mod api {
    /// API version prefix shared by every provider
    pub const VERSION_PREFIX: &str = "/v1";

    /// Regions endpoint (global region provider)
    pub const REGIONS: &str = "regions";

    /// Tenants endpoint (regional providers are tenant-scoped)
    pub const TENANTS: &str = "tenants";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Query parameter carrying the continuation token
    pub const SKIP_TOKEN_PARAM: &str = "skipToken";

    /// Accept header sent with every request
    pub const ACCEPT: &str = "application/json";
}

/// Well-known provider names advertised in region descriptors
pub mod providers {
    pub const REGION: &str = "seca.region";
    pub const WORKSPACE: &str = "seca.workspace";
    pub const COMPUTE: &str = "seca.compute";
    pub const NETWORK: &str = "seca.network";
    pub const STORAGE: &str = "seca.storage";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["SECA_TOKEN", "SECA_API_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Environment variable for the global API endpoint
    pub const ENDPOINT_ENV_VAR: &str = "SECA_ENDPOINT";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
