use crate::{
    constants::{DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_FORMAT},
    error::{Result, SimError},
    policy::{PolicyType, parse_policy},
    report::ReportFormat,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simulator settings loaded from TOML
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub policy: String, // "time-dispersion" | "route-dispersion" | "transit-nudges" | "soft-restriction"
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// point set to simulate instead of the built-in baseline
    #[serde(default)]
    pub points_csv: Option<String>,
    #[serde(default = "default_report_format")]
    pub report_format: String, // "csv" | "json"
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_report_format() -> String {
    DEFAULT_REPORT_FORMAT.to_string()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyType::TimeDispersion.to_string(),
            output_dir: default_output_dir(),
            points_csv: None,
            report_format: default_report_format(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| {
            SimError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.policy()?;
        self.report_format()?;
        if self.simulation.output_dir.trim().is_empty() {
            return Err(SimError::Config("output_dir must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn policy(&self) -> Result<PolicyType> {
        parse_policy(&self.simulation.policy)
    }

    pub fn report_format(&self) -> Result<ReportFormat> {
        ReportFormat::parse(&self.simulation.report_format)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.simulation.output_dir)
    }

    pub fn points_csv(&self) -> Option<PathBuf> {
        self.simulation
            .points_csv
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.policy().unwrap(), PolicyType::TimeDispersion);
        assert_eq!(config.report_format().unwrap(), ReportFormat::Csv);
        assert_eq!(config.output_dir(), PathBuf::from("reports"));
        assert!(config.points_csv().is_none());
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config = Config::from_toml_str("[simulation]\npolicy = \"transit-nudges\"\n").unwrap();
        assert_eq!(config.policy().unwrap(), PolicyType::TransitNudges);
        assert_eq!(config.simulation.output_dir, "reports");
        assert_eq!(config.simulation.report_format, "csv");
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
[simulation]
policy = "route-dispersion"
output_dir = "out/reports"
points_csv = "data/points.csv"
report_format = "json"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.report_format().unwrap(), ReportFormat::Json);
        assert_eq!(config.points_csv(), Some(PathBuf::from("data/points.csv")));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = Config::from_toml_str("[simulation]\npolicy = \"curfew\"\n").unwrap_err();
        assert!(matches!(err, SimError::UnknownPolicy(_)));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let toml = "[simulation]\npolicy = \"time-dispersion\"\nreport_format = \"xml\"\n";
        assert!(matches!(
            Config::from_toml_str(toml),
            Err(SimError::UnknownReportFormat(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        assert!(matches!(
            Config::from_toml_str("[simulation\npolicy="),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\npolicy = \"soft-restriction\"").unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.policy().unwrap(), PolicyType::SoftRestriction);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file(Path::new("missing/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
