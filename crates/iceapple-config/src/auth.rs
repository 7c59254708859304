use std::env;

/// Name of the cookie the admin panel stores its access token in.
pub const DEFAULT_ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Where unauthenticated visitors of the admin area are sent.
pub const DEFAULT_LOGIN_PATH: &str = "/";

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub access_token_cookie: String,
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_cookie: DEFAULT_ACCESS_TOKEN_COOKIE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            access_token_cookie: env::var("ACCESS_TOKEN_COOKIE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_COOKIE.to_string()),
            login_path: env::var("LOGIN_PATH")
                .ok()
                .filter(|s| s.starts_with('/'))
                .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_auth_config() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_cookie, "accessToken");
        assert_eq!(config.login_path, "/");
    }
}
