use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = PageConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
    assert_eq!(cfg.margin_left, 30.0);
    assert_eq!(cfg.margin_right, 50.0);
    assert_eq!(cfg.resize_debounce_ms, 300);
    assert_eq!(cfg.scatter.footprint, 64.0);
}

#[test]
fn partial_scatter_section_keeps_other_defaults() {
    let cfg = PageConfig::from_json_str(r#"{ "scatter": { "footprint": 48 } }"#).unwrap();
    assert_eq!(cfg.scatter.footprint, 48.0);
    assert_eq!(cfg.scatter.trials, 50);
    assert_eq!(cfg.scatter.seed_salt, "BaseSeed");
}

#[test]
fn invalid_values_are_config_errors() {
    let err = PageConfig::from_json_str(r#"{ "margin_left": -4 }"#).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
    assert!(err.to_string().contains("margin_left"));

    let err = PageConfig::from_json_str(r#"{ "scatter": { "trials": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("scatter: validation error: trials"));

    let err = PageConfig::from_json_str(r#"{ "default_title": "" }"#).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageConfig::from_json_str("{ margin_left: 1 }").unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
}

#[test]
fn skipped_titles_compare_trimmed_and_case_insensitive() {
    let cfg = PageConfig::default();
    assert!(cfg.is_skipped_title("  Navigation \n"));
    assert!(cfg.is_skipped_title("NAVIGATION"));
    assert!(!cfg.is_skipped_title("Navigation tools"));
}

#[test]
fn default_catalog_resolves_every_domain_to_its_favicon() {
    let cfg = PageConfig::default();
    assert!(cfg.logos.is_empty());
    assert!(matches!(
        cfg.logos.source_for("github.com"),
        crate::logos::catalog::LogoSource::Favicon(_)
    ));

    let cfg = PageConfig::from_json_str(r#"{ "logos": { "github.com": "img/gh.png" } }"#).unwrap();
    assert_eq!(cfg.logos.len(), 1);
    assert_eq!(cfg.logos.source_for("github.com").url(), "img/gh.png");
    assert_eq!(cfg.margin_left, 30.0);
}
