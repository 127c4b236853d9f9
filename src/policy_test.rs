use super::*;

type Response = http::Response<String>;

fn options() -> CorsOptions {
    CorsOptions {
        allow_origins: vec!["http://foo.com".into()],
        allow_methods: vec!["get".into(), "Post".into()],
        allow_headers: vec!["Content-Type".into()],
        expose_headers: vec!["X-Trace".into()],
        ..CorsOptions::default()
    }
}

mod new {
    use super::*;

    #[test]
    fn when_options_valid_should_normalize_entries() {
        // Arrange & Act
        let policy = CorsPolicy::<Response>::new(options()).expect("valid CORS configuration");

        // Assert
        assert!(policy.origins().is_allowed(Some("http://foo.com")));
        assert_eq!(policy.methods().header_value().as_deref(), Some("GET, POST"));
        assert_eq!(policy.headers().header_value().as_deref(), Some("content-type"));
        assert_eq!(policy.exposed_headers().header_value().as_deref(), Some("x-trace"));
        assert_eq!(policy.max_age(), 0);
        assert!(!policy.credentials());
        assert!(!policy.block_disallowed_requests());
    }

    #[test]
    fn when_max_age_negative_should_fail() {
        // Arrange
        let options = CorsOptions {
            max_age: -1,
            ..options()
        };

        // Act
        let result = CorsPolicy::<Response>::new(options);

        // Assert
        assert_eq!(
            result.err(),
            Some(ConfigError::NegativeMaxAge { value: -1 })
        );
    }

    #[test]
    fn when_wildcard_lists_should_select_any_variants() {
        // Arrange
        let options = CorsOptions {
            allow_origins: vec!["*".into()],
            allow_methods: vec!["*".into()],
            allow_headers: vec!["*".into()],
            ..CorsOptions::default()
        };

        // Act
        let policy = CorsPolicy::<Response>::new(options).expect("valid CORS configuration");

        // Assert
        assert!(policy.origins().is_any());
        assert!(policy.methods().is_any());
        assert!(policy.headers().is_any());
    }

    #[test]
    fn when_origin_entry_empty_should_fail() {
        let options = CorsOptions {
            allow_origins: vec![String::new()],
            ..CorsOptions::default()
        };

        let result = CorsPolicy::<Response>::new(options);

        assert!(matches!(result, Err(ConfigError::EmptyEntry { .. })));
    }

    #[test]
    fn when_header_entry_invalid_should_fail() {
        let options = CorsOptions {
            allow_headers: vec!["X-Good".into(), "x bad".into()],
            ..CorsOptions::default()
        };

        let result = CorsPolicy::<Response>::new(options);

        assert_eq!(
            result.err(),
            Some(ConfigError::InvalidToken {
                field: "allow_headers",
                value: "x bad".into(),
            })
        );
    }
}

mod builder {
    use super::*;

    #[test]
    fn when_credentials_with_any_origin_should_still_build() {
        // Arrange & Act
        let policy = CorsPolicy::<Response>::builder()
            .allow_origins(AllowedOrigins::any())
            .allow_credentials(true)
            .build()
            .expect("valid CORS configuration");

        // Assert
        assert!(policy.credentials());
        assert!(policy.origins().is_any());
    }

    #[test]
    fn when_hooks_attached_should_expose_them() {
        // Arrange & Act
        let policy = CorsPolicy::<Response>::builder()
            .on_origin_rejected(|_| http::Response::new("custom".to_string()))
            .build()
            .expect("valid CORS configuration");

        // Assert
        assert!(policy.on_origin_rejected().is_some());
        assert!(policy.on_method_rejected().is_none());
        assert!(policy.on_header_rejected().is_none());
    }

    #[test]
    fn when_max_age_set_should_store_seconds() {
        let policy = CorsPolicy::<Response>::builder()
            .max_age(3600)
            .build()
            .expect("valid CORS configuration");

        assert_eq!(policy.max_age(), 3600);
    }
}

mod debug {
    use super::*;

    #[test]
    fn should_report_hook_presence_without_calling_it() {
        let policy = CorsPolicy::<Response>::builder()
            .on_header_rejected(|_| http::Response::new(String::new()))
            .build()
            .expect("valid CORS configuration");

        let rendered = format!("{:?}", policy);

        assert!(rendered.contains("on_header_rejected: true"));
        assert!(rendered.contains("on_origin_rejected: false"));
    }
}
