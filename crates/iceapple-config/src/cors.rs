use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

        Self {
            allowed_origins: parse_origins(&raw),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let config = CorsConfig::default();
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" https://admin.iceapple.kr , ,http://localhost:5173,");
        assert_eq!(
            origins,
            vec!["https://admin.iceapple.kr", "http://localhost:5173"]
        );
    }
}
