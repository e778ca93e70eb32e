//! Coordinate list + file list ingestion.
//!
//! Row position (not the CSV's own index column) defines the dataset index
//! used to correlate a coordinate row with its file entry. Malformed rows are
//! skipped without shifting the rows after them.

use crate::error::{GalleryError, GalleryResult};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct CoordRow {
    pub index: usize,
    pub raw: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatasetRow {
    pub index: usize,
    pub raw: Vec2,
    pub path: String,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub rows: Vec<DatasetRow>,
    pub errors: Vec<GalleryError>,
}

/// Parse `index,x,y` lines. A leading line with no numeric field is taken as a header.
///
/// Returns the valid rows plus one error per skipped line, and the number of
/// data lines seen (valid or not) so callers can compare against the file list.
pub fn parse_coords(text: &str) -> (Vec<CoordRow>, Vec<GalleryError>, usize) {
    let mut rows = Vec::new();
    let mut errors = Vec::new();
    let mut position = 0usize;
    let mut first = true;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if first {
            first = false;
            if is_header(line) {
                continue;
            }
        }
        match parse_coord_line(line, line_no + 1) {
            Ok(raw) => rows.push(CoordRow {
                index: position,
                raw,
            }),
            Err(e) => {
                log::warn!("[dataset] skipping row {}: {}", position, e);
                errors.push(e);
            }
        }
        position += 1;
    }
    (rows, errors, position)
}

/// One reference per line; blank lines are ignored.
pub fn parse_file_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .all(|field| field.trim().parse::<f64>().is_err())
}

fn parse_coord_line(line: &str, line_no: usize) -> GalleryResult<Vec2> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(GalleryError::data_format(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }
    let mut values = [0.0f32; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        let v: f32 = field
            .parse()
            .map_err(|_| GalleryError::data_format(line_no, format!("non-numeric field {field:?}")))?;
        if !v.is_finite() {
            return Err(GalleryError::data_format(
                line_no,
                format!("non-finite field {field:?}"),
            ));
        }
        *slot = v;
    }
    Ok(Vec2::new(values[1], values[2]))
}

impl Dataset {
    /// Correlate the coordinate CSV with the file list by row position.
    pub fn from_sources(coords_csv: &str, files_txt: &str) -> Self {
        let (coords, mut errors, data_lines) = parse_coords(coords_csv);
        let files = parse_file_list(files_txt);

        if data_lines != files.len() {
            let e = GalleryError::CountMismatch {
                coords: data_lines,
                files: files.len(),
            };
            log::warn!("[dataset] {}; truncating to the shorter list", e);
            errors.push(e);
        }

        let rows = coords
            .into_iter()
            .filter_map(|c| {
                files.get(c.index).map(|path| DatasetRow {
                    index: c.index,
                    raw: c.raw,
                    path: path.clone(),
                })
            })
            .collect::<Vec<_>>();

        log::info!(
            "[dataset] rows={} skipped={}",
            rows.len(),
            errors.len()
        );
        Self { rows, errors }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn raw_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.rows.iter().map(|r| r.raw)
    }
}
