//! Capture Data Model

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier used when the export carries no id or test type
pub const UNKNOWN: &str = "unknown";

/// Single digitizer sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Horizontal position (canvas units)
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f64,
    /// Vertical position (canvas units)
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f64,
    /// Capture time (ms, monotonic within a stroke)
    #[serde(default, deserialize_with = "millis_or_zero")]
    pub timestamp: i64,
    /// Normalized pen pressure [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Point {
    /// Point without pen attributes
    pub fn new(x: f64, y: f64, timestamp: i64) -> Self {
        Self {
            x,
            y,
            timestamp,
            ..Default::default()
        }
    }

    /// Attach a pressure reading
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// One pen-down to pen-up sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    /// Samples in chronological order
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<Point>,
    #[serde(default, deserialize_with = "optional_millis")]
    pub start_time: Option<i64>,
    #[serde(default, deserialize_with = "optional_millis")]
    pub end_time: Option<i64>,
}

impl Stroke {
    /// Stroke with both time bounds present
    pub fn new(points: Vec<Point>, start_time: i64, end_time: i64) -> Self {
        Self {
            points,
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// `end_time - start_time`, if both bounds were captured.
    ///
    /// Not clamped: a stroke recorded with `end_time < start_time` yields a
    /// negative duration. Saturates at the `i64` bounds.
    pub fn duration(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }
}

/// Capture surface dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Surface area, or 1 when either dimension is zero
    pub fn area_or_unit(&self) -> f64 {
        if self.width == 0.0 || self.height == 0.0 {
            1.0
        } else {
            self.width * self.height
        }
    }

    /// Geometric center of the canvas
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// One complete handwriting assessment capture
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SessionRecord")]
pub struct Session {
    pub id: String,
    pub test_type: String,
    /// Creation time (ms since epoch)
    pub created_at: i64,
    pub strokes: Vec<Stroke>,
    pub canvas_size: Option<CanvasSize>,
}

impl Session {
    /// Session with metadata and no strokes
    pub fn new(id: impl Into<String>, test_type: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            test_type: test_type.into(),
            created_at,
            strokes: Vec::new(),
            canvas_size: None,
        }
    }

    pub fn with_strokes(mut self, strokes: Vec<Stroke>) -> Self {
        self.strokes = strokes;
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas_size = Some(canvas);
        self
    }

    /// Every point of every stroke, in capture order
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.strokes.iter().flat_map(|s| s.points.iter())
    }

    /// Total number of captured points
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(UNKNOWN, UNKNOWN, 0)
    }
}

/// Export layout: drawing data is nested under `data`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    #[serde(default, deserialize_with = "string_or_unknown")]
    id: String,
    #[serde(default, deserialize_with = "string_or_unknown")]
    test_type: String,
    #[serde(default, deserialize_with = "millis_or_zero")]
    created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    data: SessionData,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionData {
    #[serde(default, deserialize_with = "null_as_default")]
    strokes: Vec<Stroke>,
    #[serde(default, deserialize_with = "canvas_or_none")]
    canvas_size: Option<CanvasSize>,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self {
            id: record.id,
            test_type: record.test_type,
            created_at: record.created_at,
            strokes: record.data.strokes,
            canvas_size: record.data.canvas_size,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Canvas as exported; either dimension may be missing or null
#[derive(Deserialize)]
struct CanvasRecord {
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

/// A canvas object with neither dimension counts as no canvas at all.
/// A single missing dimension reads as 0.
fn canvas_or_none<'de, D>(deserializer: D) -> Result<Option<CanvasSize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CanvasRecord>::deserialize(deserializer)? {
        Some(CanvasRecord {
            width: None,
            height: None,
        })
        | None => None,
        Some(CanvasRecord { width, height }) => Some(CanvasSize::new(
            width.unwrap_or_default(),
            height.unwrap_or_default(),
        )),
    })
}

fn string_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| UNKNOWN.to_string()))
}

/// Millisecond field that may be exported as an integer or a float.
/// Fractional values are truncated toward zero.
#[derive(Deserialize)]
#[serde(untagged)]
enum Millis {
    Int(i64),
    Float(f64),
}

impl From<Millis> for i64 {
    fn from(value: Millis) -> Self {
        match value {
            Millis::Int(ms) => ms,
            Millis::Float(ms) => ms as i64,
        }
    }
}

fn optional_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Millis>::deserialize(deserializer)?.map(i64::from))
}

fn millis_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_millis(deserializer)?.unwrap_or(0))
}
