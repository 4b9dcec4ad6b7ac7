use crate::constants::{DATE_COLUMN, HASHTAGS_COLUMN, TEXT_COLUMN};
use crate::models::Record;
use crate::types::PassThroughField;
use crate::utils::parse_post_date;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

const GZIP_MAGIC_BYTES: [u8; 2] = [0x1f, 0x8b];

/// Parses tabular post data into `Record`s.
///
/// Loading is all or nothing: the first malformed row aborts it and no partial
/// record set is returned.
pub struct PostLoader {}

/// Positions of the recognized columns within the header row.
struct ColumnLayout {
    text: usize,
    date: usize,
    hashtags: Option<usize>,
    pass_through: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, Error> {
        if headers.is_empty() {
            return Err(Error::MalformedInput(
                "Input has no header row".to_string(),
            ));
        }

        let names: Vec<&str> = headers
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim())
            .collect();

        let position = |column: &str| names.iter().position(|name| *name == column);

        let text = position(TEXT_COLUMN).ok_or_else(|| {
            Error::MalformedInput(format!("Missing required '{}' column", TEXT_COLUMN))
        })?;

        let date = position(DATE_COLUMN).ok_or_else(|| {
            Error::MalformedInput(format!("Missing required '{}' column", DATE_COLUMN))
        })?;

        let hashtags = position(HASHTAGS_COLUMN);

        let pass_through = names
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != text && *index != date && Some(*index) != hashtags)
            .map(|(index, name)| (index, name.to_string()))
            .collect();

        Ok(Self {
            text,
            date,
            hashtags,
            pass_through,
        })
    }

    fn to_record(&self, row: &StringRecord, row_number: usize) -> Result<Record, Error> {
        let text = row.get(self.text).unwrap_or_default();

        let raw_date = row.get(self.date).unwrap_or_default();
        let date = parse_post_date(raw_date).ok_or_else(|| {
            Error::MalformedInput(format!(
                "Unparseable '{}' value {:?} in row {}",
                DATE_COLUMN, raw_date, row_number
            ))
        })?;

        // Missing and blank hashtag values are treated the same
        let raw_hashtags = self
            .hashtags
            .and_then(|index| row.get(index))
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.to_string());

        let pass_through_fields: Vec<PassThroughField> = self
            .pass_through
            .iter()
            .map(|(index, name)| {
                (
                    name.clone(),
                    row.get(*index).unwrap_or_default().to_string(),
                )
            })
            .collect();

        Ok(Record::with_pass_through_fields(
            text,
            date,
            raw_hashtags,
            pass_through_fields,
        ))
    }
}

impl PostLoader {
    /// Reads posts from a CSV file, decompressing it first if it is gzipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoError` if the file cannot be read, and
    /// `Error::MalformedInput` if its contents are not valid post data.
    pub fn read_posts_from_path(path: &Path) -> Result<Vec<Record>, Error> {
        let bytes = fs::read(path)?;
        Self::read_posts_from_bytes(&bytes)
    }

    /// Reads posts from raw bytes. Gzip input is detected by its magic bytes.
    pub fn read_posts_from_bytes(bytes: &[u8]) -> Result<Vec<Record>, Error> {
        if bytes.starts_with(&GZIP_MAGIC_BYTES) {
            debug!("Decompressing gzipped input ({} bytes)", bytes.len());

            let mut decoder = GzDecoder::new(bytes);
            let mut decompressed_data = Vec::new();
            decoder.read_to_end(&mut decompressed_data).map_err(|e| {
                Error::MalformedInput(format!("Failed to decompress input: {}", e))
            })?;

            return Self::read_posts_from_reader(Cursor::new(decompressed_data));
        }

        Self::read_posts_from_reader(bytes)
    }

    /// Parses posts from a CSV-formatted string.
    pub fn read_posts_from_string(csv_str: &str) -> Result<Vec<Record>, Error> {
        Self::read_posts_from_reader(Cursor::new(csv_str))
    }

    /// Parses posts from any CSV reader.
    ///
    /// # Notes
    ///
    /// This function expects the CSV to have the following column headers:
    /// - `Text`: The free post text (required).
    /// - `Date`: A date or date-time; only the calendar date is kept (required).
    /// - `Hashtags`: Free text holding zero or more `#tag` tokens (optional).
    ///
    /// Any other column is carried along on each record untouched.
    pub fn read_posts_from_reader<R: Read>(input: R) -> Result<Vec<Record>, Error> {
        info!("Loading posts...");

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

        // Extract column headers
        let headers = reader
            .headers()
            .map_err(|e| Error::MalformedInput(format!("Failed to read headers: {}", e)))?
            .clone();

        let layout = ColumnLayout::from_headers(&headers)?;

        if layout.hashtags.is_none() {
            debug!("No '{}' column; every post gets an empty hashtag list", HASHTAGS_COLUMN);
        }

        let mut records = Vec::new();

        for (row_index, row) in reader.records().enumerate() {
            let row_number = row_index + 1;
            let row = row.map_err(|e| {
                Error::MalformedInput(format!("Failed to read row {}: {}", row_number, e))
            })?;

            records.push(layout.to_record(&row, row_number)?);
        }

        debug!("Loaded {} posts", records.len());

        Ok(records)
    }
}
