//! User-tunable layout parameters and the slider table that edits them.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Layout parameters for the scattered pile.
///
/// Every field is a plain number in its slider's units (mostly percent).
/// Values outside the slider range are accepted; the engine is total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PileParams {
    #[serde(serialize_with = "whole_number")]
    pub canvas_width: f64,
    #[serde(serialize_with = "whole_number")]
    pub tightness: f64,
    #[serde(serialize_with = "whole_number")]
    pub scatter: f64,
    #[serde(serialize_with = "whole_number")]
    pub rotation: f64,
    #[serde(serialize_with = "whole_number")]
    pub photo_size: f64,
    #[serde(serialize_with = "whole_number")]
    pub canvas_height: f64,
    #[serde(serialize_with = "whole_number")]
    pub offset_x: f64,
    #[serde(serialize_with = "whole_number")]
    pub offset_y: f64,
    #[serde(serialize_with = "whole_number")]
    pub stagger: f64,
}

impl Default for PileParams {
    fn default() -> Self {
        Self {
            canvas_width: 80.0,
            tightness: 0.0,
            scatter: 15.0,
            rotation: 35.0,
            photo_size: 15.0,
            canvas_height: 8.0,
            offset_x: 0.0,
            offset_y: 0.0,
            stagger: 30.0,
        }
    }
}

// Exported configs print `80`, not `80.0`.
fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl PileParams {
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::CanvasWidth => self.canvas_width,
            ParamKey::Tightness => self.tightness,
            ParamKey::Scatter => self.scatter,
            ParamKey::Rotation => self.rotation,
            ParamKey::PhotoSize => self.photo_size,
            ParamKey::CanvasHeight => self.canvas_height,
            ParamKey::OffsetX => self.offset_x,
            ParamKey::OffsetY => self.offset_y,
            ParamKey::Stagger => self.stagger,
        }
    }

    pub fn set(&mut self, key: ParamKey, value: f64) {
        let slot = match key {
            ParamKey::CanvasWidth => &mut self.canvas_width,
            ParamKey::Tightness => &mut self.tightness,
            ParamKey::Scatter => &mut self.scatter,
            ParamKey::Rotation => &mut self.rotation,
            ParamKey::PhotoSize => &mut self.photo_size,
            ParamKey::CanvasHeight => &mut self.canvas_height,
            ParamKey::OffsetX => &mut self.offset_x,
            ParamKey::OffsetY => &mut self.offset_y,
            ParamKey::Stagger => &mut self.stagger,
        };
        *slot = value;
    }

    /// Store a raw slider reading, rounded half-up to one decimal place.
    pub fn apply_slider(&mut self, key: ParamKey, raw: f64) {
        self.set(key, round_tenth(raw));
    }

    /// Parse and apply a `key=value` assignment such as `scatter=20`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<ParamKey, ConfigError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidValue {
                key: assignment.trim().to_string(),
                value: String::new(),
            })?;
        let key: ParamKey = name.trim().parse()?;
        let value: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.wire_name().to_string(),
            value: raw.trim().to_string(),
        })?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: key.wire_name().to_string(),
                value: raw.trim().to_string(),
            });
        }
        self.set(key, value);
        Ok(key)
    }
}

#[inline]
fn round_tenth(raw: f64) -> f64 {
    (raw * 10.0 + 0.5).floor() / 10.0
}

/// Names one field of [`PileParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    CanvasWidth,
    Tightness,
    Scatter,
    Rotation,
    PhotoSize,
    CanvasHeight,
    OffsetX,
    OffsetY,
    Stagger,
}

impl ParamKey {
    pub const ALL: [ParamKey; 9] = [
        ParamKey::CanvasWidth,
        ParamKey::Tightness,
        ParamKey::Scatter,
        ParamKey::Rotation,
        ParamKey::PhotoSize,
        ParamKey::CanvasHeight,
        ParamKey::OffsetX,
        ParamKey::OffsetY,
        ParamKey::Stagger,
    ];

    /// Field name used in exported configs and `data-param` attributes.
    pub fn wire_name(self) -> &'static str {
        match self {
            ParamKey::CanvasWidth => "canvasWidth",
            ParamKey::Tightness => "tightness",
            ParamKey::Scatter => "scatter",
            ParamKey::Rotation => "rotation",
            ParamKey::PhotoSize => "photoSize",
            ParamKey::CanvasHeight => "canvasHeight",
            ParamKey::OffsetX => "offsetX",
            ParamKey::OffsetY => "offsetY",
            ParamKey::Stagger => "stagger",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::CanvasWidth => "Canvas width",
            ParamKey::Tightness => "Tightness",
            ParamKey::Scatter => "Scatter",
            ParamKey::Rotation => "Rotation",
            ParamKey::PhotoSize => "Photo size",
            ParamKey::CanvasHeight => "Canvas height",
            ParamKey::OffsetX => "Offset X",
            ParamKey::OffsetY => "Offset Y",
            ParamKey::Stagger => "Stagger",
        }
    }

    pub fn slider(self) -> &'static SliderSpec {
        // SLIDERS is ordered like ALL
        &SLIDERS[self as usize]
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ParamKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .into_iter()
            .find(|k| k.wire_name() == s)
            .ok_or_else(|| ConfigError::UnknownParam(s.to_string()))
    }
}

/// Range and step of the control that edits one parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SliderSpec {
    #[serde(serialize_with = "serialize_key")]
    pub key: ParamKey,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

fn serialize_key<S: Serializer>(key: &ParamKey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(key.wire_name())
}

impl SliderSpec {
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    /// How far along the track `value` sits, in percent.
    pub fn fill_percent(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * 100.0
    }
}

pub static SLIDERS: [SliderSpec; 9] = [
    SliderSpec { key: ParamKey::CanvasWidth, min: 20.0, max: 100.0, step: 1.0 },
    SliderSpec { key: ParamKey::Tightness, min: 0.0, max: 100.0, step: 1.0 },
    SliderSpec { key: ParamKey::Scatter, min: 0.0, max: 50.0, step: 1.0 },
    SliderSpec { key: ParamKey::Rotation, min: 0.0, max: 45.0, step: 1.0 },
    SliderSpec { key: ParamKey::PhotoSize, min: 8.0, max: 35.0, step: 1.0 },
    SliderSpec { key: ParamKey::CanvasHeight, min: 3.0, max: 20.0, step: 1.0 },
    SliderSpec { key: ParamKey::OffsetX, min: -30.0, max: 30.0, step: 1.0 },
    SliderSpec { key: ParamKey::OffsetY, min: -20.0, max: 20.0, step: 1.0 },
    SliderSpec { key: ParamKey::Stagger, min: 0.0, max: 100.0, step: 5.0 },
];
