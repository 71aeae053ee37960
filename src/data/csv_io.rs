//! Reading and writing `time,temp` CSV files.
//!
//! The file format is two columns with the header `time,temp`. Files written
//! by the logger carry `HH:MM:SS` time-of-day stamps; files from elsewhere may
//! carry full dates, so [`parse_timestamp`] accepts a handful of common forms.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::data::reading::{Reading, Series};
use crate::error::{Error, Result};

pub const TIME_COLUMN: &str = "time";
pub const TEMP_COLUMN: &str = "temp";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S%.f",
    // Month first, as spreadsheet exports write it.
    "%m/%d/%Y %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M",
];
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A parsed value of the `time` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Full date and time. Offsets, if present, are normalised to UTC.
    At(NaiveDateTime),
    /// Time of day only, as written by the logger.
    TimeOfDay(NaiveTime),
}

/// Parse one `time` cell. Returns `None` for anything unrecognised.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::At(dt.naive_utc()));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Timestamp::At(dt));
        }
    }
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(Timestamp::TimeOfDay(t));
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| Timestamp::At(d.and_time(NaiveTime::MIN)))
}

/// Minutes from `first` to `at`, fractional.
///
/// This is the full elapsed time: a sample one day and five minutes after
/// the first one is at `1445.0`, not `5.0`.
pub fn elapsed_minutes(first: NaiveDateTime, at: NaiveDateTime) -> f64 {
    (at - first).num_milliseconds() as f64 / 60_000.0
}

/// Turns a column of [`Timestamp`]s into absolute datetimes.
///
/// Time-of-day stamps take the date of the previous row and roll over to the
/// next day when the clock goes backwards, so logs across midnight stay monotonic.
/// A file that starts with time-of-day stamps has no real date to anchor on,
/// so a full date appearing later in it cannot be placed and yields `None`.
#[derive(Debug, Default)]
struct StampResolver {
    prev: Option<NaiveDateTime>,
    undated: bool,
}

impl StampResolver {
    fn resolve(&mut self, stamp: Timestamp) -> Option<NaiveDateTime> {
        let at = match stamp {
            Timestamp::At(_) if self.undated => return None,
            Timestamp::At(dt) => dt,
            Timestamp::TimeOfDay(t) => match self.prev {
                None => {
                    self.undated = true;
                    NaiveDate::default().and_time(t)
                }
                Some(prev) => {
                    let same_day = prev.date().and_time(t);
                    if same_day < prev {
                        same_day + Duration::days(1)
                    } else {
                        same_day
                    }
                }
            },
        };
        self.prev = Some(at);
        Some(at)
    }
}

/// Read a `time,temp` CSV file into a [`Series`] labelled with the file name.
///
/// A zero-byte file or a file with only the header gives an empty series.
pub fn read_series(path: impl AsRef<Path>) -> Result<Series> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    read_series_from(file, path, label)
}

fn read_series_from<R: Read>(reader: R, path: &Path, label: String) -> Result<Series> {
    let csv_err = |source: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let mut series = Series::new(label);
    if headers.is_empty() {
        return Ok(series);
    }
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let time_idx = column(TIME_COLUMN)?;
    let temp_idx = column(TEMP_COLUMN)?;

    let mut resolver = StampResolver::default();
    let mut first: Option<NaiveDateTime> = None;
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line());
        let raw_time = record.get(time_idx).unwrap_or_default();
        let raw_temp = record.get(temp_idx).unwrap_or_default();

        let bad_stamp = || Error::Timestamp {
            path: path.to_path_buf(),
            line,
            value: raw_time.to_string(),
        };
        let stamp = parse_timestamp(raw_time).ok_or_else(bad_stamp)?;
        let temperature: f64 = raw_temp.parse().map_err(|_| Error::Temperature {
            path: path.to_path_buf(),
            line,
            value: raw_temp.to_string(),
        })?;

        let at = resolver.resolve(stamp).ok_or_else(bad_stamp)?;
        let t0 = *first.get_or_insert(at);
        series.push(elapsed_minutes(t0, at), temperature);
    }

    log::debug!("read {} rows from {}", series.len(), path.display());
    Ok(series)
}

/// Write `times` and `temps` as a `time,temp` CSV, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn write_csv<S: AsRef<str>>(path: impl AsRef<Path>, times: &[S], temps: &[S]) -> Result<usize> {
    let path = path.as_ref();
    if times.len() != temps.len() {
        return Err(Error::LengthMismatch {
            times: times.len(),
            temps: temps.len(),
        });
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let rows = write_rows(file, times, temps).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {rows} readings to {}", path.display());
    Ok(rows)
}

fn write_rows<W: Write, S: AsRef<str>>(out: W, times: &[S], temps: &[S]) -> csv::Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([TIME_COLUMN, TEMP_COLUMN])?;
    for (t, v) in times.iter().zip(temps) {
        wtr.write_record([t.as_ref(), v.as_ref()])?;
    }
    wtr.flush()?;
    Ok(times.len())
}

/// Write logged readings with [`write_csv`].
pub fn write_readings(path: impl AsRef<Path>, readings: &[Reading]) -> Result<usize> {
    let times: Vec<&str> = readings.iter().map(|r| r.time.as_str()).collect();
    let temps: Vec<&str> = readings.iter().map(|r| r.temperature.as_str()).collect();
    write_csv(path, &times, &temps)
}
