use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod args;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use args::DashboardArgs;
pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use logging::init_tracing;
pub use settings::{LoggingSettings, ProviderKind, ProviderSettings, ServerSettings, Settings};

/// Environment variables with this prefix override file values,
/// e.g. `CAPM__PROVIDER__KIND=csv` or `CAPM__DASHBOARD__TICKER=msft`.
pub const ENV_PREFIX: &str = "CAPM";

/// Loads the application settings from `path` layered with `CAPM__*` environment variables.
///
/// The file is optional; anything it leaves out takes its default. The
/// `[dashboard]` section is validated before it is returned.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings = builder.try_deserialize::<Settings>()?;
    settings.dashboard = settings.dashboard.validate()?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded settings.");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_settings(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(settings.dashboard, DashboardConfig::default());
        assert_eq!(settings.provider.kind, ProviderKind::Yahoo);
        assert_eq!(settings.provider.benchmark_symbol, "^GSPC");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn file_values_are_read_and_validated() {
        let path = std::env::temp_dir().join(format!("capm-settings-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[dashboard]
ticker = "msft"
ma_window = 10

[provider]
kind = "csv"
csv_dir = "fixtures"
"#
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.dashboard.ticker, "MSFT");
        assert_eq!(settings.dashboard.ma_window, 10);
        assert_eq!(settings.provider.kind, ProviderKind::Csv);
        assert_eq!(settings.provider.csv_dir, std::path::PathBuf::from("fixtures"));
        assert_eq!(settings.provider.history_range, "1y");
    }

    #[test]
    fn invalid_dashboard_section_is_rejected() {
        let path =
            std::env::temp_dir().join(format!("capm-settings-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[dashboard]\nrisk_free_rate = 0.5\n").unwrap();

        let result = load_settings(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
