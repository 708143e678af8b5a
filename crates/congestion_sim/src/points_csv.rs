use crate::constants::POINT_CSV_HEADERS;
use crate::error::{Result, SimError};
use crate::model::{AreaTag, SamplePoint};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Reads a sample point set from a CSV file
///
/// # Errors
/// Returns error if the file cannot be opened or its content is invalid
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SamplePoint>> {
    let file = std::fs::File::open(path)?;
    read_points_from_reader(file)
}

/// Read CSV with `id,mesh,lng,lat,intensity,area_tag` format.
/// - Blank rows are skipped
/// - Intensities outside [0, 1] are clamped
/// - Duplicate ids and unknown area tags are errors
pub fn read_points_from_reader<R: Read>(reader: R) -> Result<Vec<SamplePoint>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    validate_csv_headers(&mut rdr)?;

    let mut points = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // 1-indexed, +1 for header

        if let Some(point) = parse_record(&rec, row)? {
            if !seen_ids.insert(point.id.clone()) {
                return Err(SimError::DuplicatePointId { row, id: point.id });
            }
            points.push(point);
        }
    }

    Ok(points)
}

/// Writes points in the same format `read_points_from_reader` accepts
pub fn write_points<W: Write>(points: &[SamplePoint], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(POINT_CSV_HEADERS)?;
    for p in points {
        let lng = p.lng.to_string();
        let lat = p.lat.to_string();
        let intensity = p.intensity().to_string();
        wtr.write_record([
            p.id.as_str(),
            p.mesh.as_str(),
            lng.as_str(),
            lat.as_str(),
            intensity.as_str(),
            p.area_tag.as_ref(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| SimError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for (i, expected) in POINT_CSV_HEADERS.iter().enumerate() {
        let found = headers
            .get(i)
            .ok_or_else(|| SimError::CsvHeader(format!("Missing '{}' column at index {}", expected, i)))?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(SimError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                expected, i, found
            )));
        }
    }
    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<SamplePoint>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    if rec.len() < POINT_CSV_HEADERS.len() {
        return Err(SimError::CsvRow {
            row,
            expected: POINT_CSV_HEADERS.len(),
            got: rec.len(),
        });
    }

    let id = &rec[0];
    let mesh = &rec[1];
    let lng = parse_float(&rec[2], "lng", row)?;
    let lat = parse_float(&rec[3], "lat", row)?;
    let intensity = parse_float(&rec[4], "intensity", row)?;
    let label = &rec[5];
    let area_tag = AreaTag::from_str(&label.to_ascii_lowercase()).map_err(|_| SimError::UnknownAreaTag {
        row,
        label: label.to_string(),
    })?;

    Ok(Some(SamplePoint::new(id, mesh, (lng, lat), intensity, area_tag)))
}

fn parse_float(value: &str, column: &'static str, row: usize) -> Result<f64> {
    let n: f64 = value.parse().map_err(|source| SimError::NumberParse {
        row,
        column,
        value: value.to_string(),
        source,
    })?;
    if !n.is_finite() {
        return Err(SimError::NonFiniteNumber {
            row,
            column,
            value: value.to_string(),
        });
    }
    Ok(n)
}
