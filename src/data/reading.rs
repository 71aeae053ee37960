//! Readings entered by hand and series loaded from files.

/// One manually entered reading, kept as the exact text that goes into the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Wall-clock time of entry, `HH:MM:SS`.
    pub time: String,
    /// Temperature as typed (digits only).
    pub temperature: String,
}

impl Reading {
    pub fn new(time: impl Into<String>, temperature: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            temperature: temperature.into(),
        }
    }
}

/// A time/temperature curve from a single source.
///
/// `minutes[i]` is the elapsed time of sample `i` since sample `0`, so the
/// first value is always `0.0`. Both vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub label: String,
    minutes: Vec<f64>,
    temperatures: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Build a series from `(minutes, temperature)` pairs.
    pub fn from_points(label: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut series = Self::new(label);
        for (minutes, temperature) in points {
            series.push(minutes, temperature);
        }
        series
    }

    pub(crate) fn push(&mut self, minutes: f64, temperature: f64) {
        self.minutes.push(minutes);
        self.temperatures.push(temperature);
    }

    pub fn minutes(&self) -> &[f64] {
        &self.minutes
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    /// `[x, y]` pairs in the layout egui_plot expects.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.minutes
            .iter()
            .zip(&self.temperatures)
            .map(|(x, y)| [*x, *y])
            .collect()
    }
}
