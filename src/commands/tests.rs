//! Tests for command configuration helpers

use super::*;

#[cfg(test)]
mod resolve_tests {
    use super::*;

    // The env-var tests share process state, so each one sets or removes the
    // variable it reads before asserting.

    #[test]
    fn test_resolve_api_base_from_option() {
        let base = resolve_api_base(Some("http://example.org/api/".to_string())).unwrap();
        assert_eq!(base, "http://example.org/api");
    }

    #[test]
    fn test_resolve_api_base_from_env_and_default() {
        std::env::set_var(API_BASE_ENV_VAR, "https://db.example.org/api");
        assert_eq!(resolve_api_base(None).unwrap(), "https://db.example.org/api");

        std::env::remove_var(API_BASE_ENV_VAR);
        assert_eq!(resolve_api_base(None).unwrap(), DEFAULT_API_BASE);

        // Blank values fall through to the default.
        std::env::set_var(API_BASE_ENV_VAR, "   ");
        assert_eq!(resolve_api_base(None).unwrap(), DEFAULT_API_BASE);
        std::env::remove_var(API_BASE_ENV_VAR);
    }

    #[test]
    fn test_resolve_api_base_rejects_non_http() {
        let result = resolve_api_base(Some("ftp://example.org".to_string()));
        match result.unwrap_err() {
            EsportsError::InvalidApiBase { url } => assert_eq!(url, "ftp://example.org"),
            other => panic!("Expected InvalidApiBase, got {other:?}"),
        }

        assert!(resolve_api_base(Some("not a url".to_string())).is_err());
    }

    #[test]
    fn test_resolve_timeout() {
        assert_eq!(resolve_timeout(Some(3)).unwrap(), Duration::from_secs(3));
        assert!(matches!(
            resolve_timeout(Some(0)),
            Err(EsportsError::InvalidTimeout { .. })
        ));

        std::env::set_var(TIMEOUT_ENV_VAR, "12");
        assert_eq!(resolve_timeout(None).unwrap(), Duration::from_secs(12));

        std::env::set_var(TIMEOUT_ENV_VAR, "soon");
        assert!(resolve_timeout(None).is_err());

        // Option overrides env
        assert_eq!(resolve_timeout(Some(1)).unwrap(), Duration::from_secs(1));

        std::env::remove_var(TIMEOUT_ENV_VAR);
        assert_eq!(resolve_timeout(None).unwrap(), DEFAULT_TIMEOUT);
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-01-14").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
        );
        assert!(matches!(
            parse_date("14.01.2026"),
            Err(EsportsError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("title=Dota 2").unwrap(),
            ("title".to_string(), "Dota 2".to_string())
        );
        assert_eq!(
            parse_field("details=a=b").unwrap(),
            ("details".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_field("genre=").unwrap().1, "");
        assert!(parse_field("title").is_err());
        assert!(parse_field("=x").is_err());
    }
}
