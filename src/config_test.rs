use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_preview_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TEXTS_FILE");
        std::env::remove_var("LARGE_TABLE_COLUMNS");
    }
}

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_out_of_range_values() {
    assert_eq!(
        parse_port(Some("70000")),
        Err(ConfigError::Invalid { var: "PORT", value: "70000".to_owned() })
    );
}

#[test]
fn parse_optional_usize_reports_variable_name() {
    let err = parse_optional_usize("LARGE_TABLE_COLUMNS", Some("many")).unwrap_err();
    assert_eq!(err.to_string(), "invalid LARGE_TABLE_COLUMNS: 'many'");
    assert_eq!(parse_optional_usize("LARGE_TABLE_COLUMNS", Some("0")), Ok(Some(0)));
}

#[test]
fn render_overrides_only_when_threshold_configured() {
    let config = PreviewConfig { port: 3000, texts_file: None, large_table_columns: None };
    assert_eq!(config.render_overrides(), None);

    let config = PreviewConfig { large_table_columns: Some(0), ..config };
    let render = config.render_overrides().unwrap();
    assert_eq!(render.large_table_columns, 0);
    assert_eq!(render.frame_height_px, RenderConfig::default().frame_height_px);
}

#[test]
fn from_env_reads_all_variables() {
    unsafe {
        clear_preview_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("TEXTS_FILE", "demos/texts.json");
        std::env::set_var("LARGE_TABLE_COLUMNS", "12");
    }

    let config = PreviewConfig::from_env().unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.texts_file, Some(PathBuf::from("demos/texts.json")));
    assert_eq!(config.large_table_columns, Some(12));

    unsafe { clear_preview_env() };
}
