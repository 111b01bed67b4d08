//! Tabular dataset ingestion.
//!
//! Rows arrive as a delimited text export (comma or semicolon separated,
//! RFC 4180-style quoting). Layout contract: 5 leading metadata columns,
//! then the 98 item columns in item order, then the two named columns
//! located by exact header text. Remote acquisition and report
//! serialization live outside this crate.

use crate::core::Respondent;
use crate::errors::ChasideError;
use std::fs;
use std::path::Path;

/// Exact header of the declared-career column.
pub const CAREER_COLUMN: &str = "¿A qué carrera desea ingresar?";
/// Exact header of the respondent-name column.
pub const NAME_COLUMN: &str = "Ingrese su nombre completo";
/// Leading columns ignored by the core (timestamps, consent, etc.).
pub const METADATA_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn from_path(path: &Path) -> Result<Self, ChasideError> {
        let contents = fs::read_to_string(path)?;
        let dataset = Self::parse(&contents)?;
        log::debug!(
            "loaded dataset {}: {} columns, {} rows",
            path.display(),
            dataset.headers.len(),
            dataset.rows.len()
        );
        Ok(dataset)
    }

    /// Parse delimited text. The delimiter is sniffed from the header line:
    /// semicolon when it outnumbers commas, comma otherwise.
    pub fn parse(contents: &str) -> Result<Self, ChasideError> {
        let delimiter = sniff_delimiter(contents);
        let mut records = parse_records(contents, delimiter);
        if records.is_empty() {
            return Err(ChasideError::DatasetShape {
                expected: METADATA_COLUMNS + 1,
                found: 0,
            });
        }
        let headers = records.remove(0);
        Ok(Self {
            headers,
            rows: records,
        })
    }

    /// Validate the column contract and extract respondents in row order.
    ///
    /// Missing named columns are fatal and reported together; short rows
    /// are padded with empty cells, which normalize to "no" downstream.
    pub fn respondents(&self, item_count: usize) -> Result<Vec<Respondent>, ChasideError> {
        let expected = METADATA_COLUMNS + item_count;
        if self.headers.len() < expected {
            return Err(ChasideError::DatasetShape {
                expected,
                found: self.headers.len(),
            });
        }

        let career_col = self.column_index(CAREER_COLUMN);
        let name_col = self.column_index(NAME_COLUMN);
        let missing: Vec<String> = [
            (CAREER_COLUMN, career_col),
            (NAME_COLUMN, name_col),
        ]
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| format!("'{}'", name))
        .collect();
        if !missing.is_empty() {
            return Err(ChasideError::MissingColumns { columns: missing });
        }
        let (career_col, name_col) = (
            career_col.unwrap_or_default(),
            name_col.unwrap_or_default(),
        );

        let respondents = self
            .rows
            .iter()
            .map(|row| {
                let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
                Respondent {
                    name: cell(name_col),
                    declared_career: cell(career_col),
                    answers: (METADATA_COLUMNS..METADATA_COLUMNS + item_count)
                        .map(cell)
                        .collect(),
                }
            })
            .collect();
        Ok(respondents)
    }

    fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

fn sniff_delimiter(contents: &str) -> char {
    let header = contents.lines().next().unwrap_or("");
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas {
        ';'
    } else {
        ','
    }
}

/// Minimal RFC 4180-subset reader: quoted fields, doubled quotes, embedded
/// delimiters and newlines inside quotes.
fn parse_records(contents: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                // skip blank lines between records
                if record.len() > 1 || !record[0].is_empty() {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
