use crate::error::{GridError, GridResult};
use crate::geometry::Hitbox;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Keyboard layout as stored on disk: `{"keys": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescription {
    #[serde(default)]
    pub keys: Vec<KeyRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitbox: Option<RawHitbox>,
}

/// Hitbox fields are optional here so construction can report which one is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHitbox {
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub w: Option<i32>,
    #[serde(default)]
    pub h: Option<i32>,
}

impl RawHitbox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            w: Some(w),
            h: Some(h),
        }
    }

    /// Resolves into a [`Hitbox`], naming the first absent field on failure.
    ///
    /// Fails with [`GridError::CoordinateOverflow`] if `x + w` or `y + h` leaves `i32`.
    pub fn to_hitbox(&self, label: char) -> GridResult<Hitbox> {
        let require = |value: Option<i32>, field: &'static str| {
            value.ok_or(GridError::MissingField { label, field })
        };

        Hitbox::from_rect(
            require(self.x, "x")?,
            require(self.y, "y")?,
            require(self.w, "w")?,
            require(self.h, "h")?,
        )
        .ok_or(GridError::CoordinateOverflow { label })
    }
}

impl KeyRecord {
    /// Single-character name of the key, if it has one.
    ///
    /// An empty `label` counts as absent and falls through to `action`.
    pub fn name(&self) -> Option<char> {
        let name = [self.label.as_deref(), self.action.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())?;

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl LayoutDescription {
    pub fn from_json_str(content: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> GridResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
