use crate::constants::DELTA_CSV_HEADERS;
use crate::error::{Result, SimError};
use crate::model::MeshDelta;
use crate::policy::PolicyType;

use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use strum_macros::{Display, EnumString};

/// Output format of a delta report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn parse(label: &str) -> Result<Self> {
        Self::from_str(label.trim()).map_err(|_| SimError::UnknownReportFormat(label.to_string()))
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    policy: PolicyType,
    deltas: &'a [MeshDelta],
}

/// Writes `Mesh,Before,After,DeltaPct` rows in report order
pub fn write_deltas_csv<W: Write>(deltas: &[MeshDelta], writer: W) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    let mut wtr = builder.from_writer(writer);

    wtr.write_record(DELTA_CSV_HEADERS)?;
    for d in deltas {
        let before = format!("{:.1}", d.before);
        let after = format!("{:.1}", d.after);
        let pct = format!("{:.1}", d.delta_pct);
        wtr.write_record([d.mesh.as_str(), before.as_str(), after.as_str(), pct.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_deltas_json<W: Write>(policy: PolicyType, deltas: &[MeshDelta], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &JsonReport { policy, deltas })?;
    Ok(())
}

/// Saves a delta report as `deltas_{policy}_{timestamp}.{ext}` under `output_dir`
pub fn export_deltas(
    policy: PolicyType,
    deltas: &[MeshDelta],
    format: ReportFormat,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("deltas_{policy}_{timestamp}.{}", format.extension());

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| SimError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| SimError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Csv => write_deltas_csv(deltas, &mut writer)?,
        ReportFormat::Json => write_deltas_json(policy, deltas, &mut writer)?,
    }
    writer.flush()?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<MeshDelta> {
        vec![
            MeshDelta {
                mesh: "R-01".to_string(),
                before: 0.9,
                after: 1.1,
                delta_pct: 22.5,
            },
            MeshDelta {
                mesh: "A-01".to_string(),
                before: 3.3,
                after: 2.7,
                delta_pct: -18.0,
            },
        ]
    }

    #[test]
    fn test_parse_report_format() {
        assert_eq!(ReportFormat::parse("csv").unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::parse("JSON").unwrap(), ReportFormat::Json);
        assert!(matches!(
            ReportFormat::parse("html"),
            Err(SimError::UnknownReportFormat(_))
        ));
    }

    #[test]
    fn test_csv_content_format() {
        let mut buf = Vec::new();
        write_deltas_csv(&sample(), &mut buf).unwrap();
        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Mesh,Before,After,DeltaPct", "R-01,0.9,1.1,22.5", "A-01,3.3,2.7,-18.0"]);
    }

    #[test]
    fn test_json_content() {
        let mut buf = Vec::new();
        write_deltas_json(PolicyType::RouteDispersion, &sample(), &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["policy"], "route-dispersion");
        assert_eq!(v["deltas"][1]["mesh"], "A-01");
        assert_eq!(v["deltas"][1]["deltaPct"], serde_json::json!(-18.0));
    }

    #[test]
    fn test_export_deltas_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("out");
        let path = export_deltas(
            PolicyType::TimeDispersion,
            &sample(),
            ReportFormat::Csv,
            Some(&nested),
        )
        .unwrap();

        assert!(path.starts_with(&nested));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("deltas_time-dispersion_"));
        assert!(name.ends_with(".csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Mesh,Before,After,DeltaPct"));
    }

    #[test]
    fn test_export_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_deltas(
            PolicyType::SoftRestriction,
            &[],
            ReportFormat::Json,
            Some(temp_dir.path()),
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(v["deltas"].as_array().unwrap().len(), 0);
    }
}
