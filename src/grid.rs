use crate::consts::FALLBACK_LABEL;
use crate::error::{GridError, GridResult};
use crate::geometry::Hitbox;
use crate::layout::LayoutDescription;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Centre points of the keys a word passes over, in typing order.
pub type GestureCurve = Vec<[f32; 2]>;

/// Label→hitbox mapping of a whole keyboard.
///
/// Iteration follows insertion order, which decides the winner when
/// hitboxes overlap. A relabelled key keeps the position of its first entry.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    hitboxes: Vec<(char, Hitbox)>,
    index: HashMap<char, usize>,
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &LayoutDescription) -> GridResult<Self> {
        let mut grid = Self::empty();
        let mut skipped = 0usize;

        for (i, key) in layout.keys.iter().enumerate() {
            let Some(label) = key.name() else {
                debug!(
                    key = i,
                    label = ?key.label,
                    action = ?key.action,
                    "Skipping key without a single-character name"
                );
                skipped += 1;
                continue;
            };

            let raw = key.hitbox.ok_or(GridError::MissingHitbox { label })?;
            let hitbox = raw.to_hitbox(label)?;
            grid.insert(label, hitbox);
        }

        info!(
            hitboxes = grid.len(),
            skipped, "Built grid from {} layout keys", layout.keys.len()
        );
        Ok(grid)
    }

    pub fn from_json_str(content: &str) -> GridResult<Self> {
        Self::from_layout(&LayoutDescription::from_json_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        Self::from_layout(&LayoutDescription::load_from_file(path)?)
    }

    fn insert(&mut self, label: char, hitbox: Hitbox) {
        if let Some(&slot) = self.index.get(&label) {
            warn!(%label, "Duplicate key label, later hitbox replaces earlier one");
            self.hitboxes[slot].1 = hitbox;
        } else {
            self.index.insert(label, self.hitboxes.len());
            self.hitboxes.push((label, hitbox));
        }
    }

    pub fn len(&self) -> usize {
        self.hitboxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hitboxes.is_empty()
    }

    pub fn get(&self, label: char) -> Option<&Hitbox> {
        self.index.get(&label).map(|&slot| &self.hitboxes[slot].1)
    }

    pub fn contains(&self, label: char) -> bool {
        self.index.contains_key(&label)
    }

    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.hitboxes.iter().map(|(label, _)| *label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Hitbox)> + '_ {
        self.hitboxes.iter().map(|(label, hitbox)| (*label, hitbox))
    }

    /// Label of the first hitbox containing the point, or [`FALLBACK_LABEL`].
    pub fn get_nearest_hitbox(&self, x: f32, y: f32) -> char {
        self.hitboxes
            .iter()
            .find(|(_, hitbox)| hitbox.is_in(x, y))
            .map_or(FALLBACK_LABEL, |(label, _)| *label)
    }

    /// Key centres for each character of `word` the grid knows; others are dropped.
    pub fn get_centered_curve(&self, word: &str) -> GestureCurve {
        word.chars()
            .filter_map(|c| self.get(c))
            .map(Hitbox::central_coords)
            .collect()
    }

    /// Converts a whole vocabulary in parallel. Output order matches `words`.
    pub fn get_centered_curves<S>(&self, words: &[S]) -> Vec<GestureCurve>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.get_centered_curve(word.as_ref()))
            .collect()
    }
}
