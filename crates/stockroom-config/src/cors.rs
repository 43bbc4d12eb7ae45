use crate::env_or;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(&env_or("ALLOWED_ORIGINS", "*"))
    }

    pub fn parse(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }

    /// `*` anywhere in the list (or an empty list) opens CORS to every origin.
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let config = CorsConfig::parse(" http://a.test , ,http://b.test");
        assert_eq!(
            config.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(!config.allows_any());
    }

    #[test]
    fn test_wildcard_allows_any() {
        assert!(CorsConfig::parse("*").allows_any());
        assert!(CorsConfig::parse("").allows_any());
    }
}
