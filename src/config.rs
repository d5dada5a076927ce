/// Configuration constants for the console API
pub mod api {
    /// Base path for the console API
    pub const BASE_PATH: &str = "/console";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Projects endpoint (nested under an organization)
    pub const PROJECTS: &str = "projects";

    /// Workspaces endpoint (nested under a project)
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace configuration bundle endpoint
    pub const DOWNLOAD: &str = "download";

    /// Header carrying the client API key
    pub const API_KEY_HEADER: &str = "x-api-key";
}

/// Configuration constants for the local config store
pub mod store {
    /// Config directory name (relative to HOME)
    pub const DIR_NAME: &str = ".consolectl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the config file path
    pub const ENV_VAR: &str = "CONSOLECTL_CONFIG";
}

/// Keys and tags for the persisted selection
pub mod selection {
    /// Namespace root holding the whole selection
    pub const ROOT: &str = "console";

    /// Organization type tag for enterprise organizations
    pub const ORG_TYPE_ENTERPRISE: &str = "entp";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name (inside the config directory)
    pub const FILE_NAME: &str = "credentials.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["CONSOLE_ACCESS_TOKEN", "CONSOLE_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default console host
    pub const HOST: &str = "developer.console.io";

    /// Default client API key
    pub const API_KEY: &str = "consolectl";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
