#![allow(dead_code)]

use gesture_grid::{KeyRecord, LayoutDescription, RawHitbox};

/// Builder for KeyRecord to clean up tests
pub struct KeyBuilder {
    key: KeyRecord,
}

impl KeyBuilder {
    pub fn label(label: &str) -> Self {
        Self {
            key: KeyRecord {
                label: Some(label.to_string()),
                action: None,
                hitbox: Some(RawHitbox::new(0, 0, 1, 1)),
            },
        }
    }

    pub fn action(action: &str) -> Self {
        Self {
            key: KeyRecord {
                label: None,
                action: Some(action.to_string()),
                hitbox: Some(RawHitbox::new(0, 0, 1, 1)),
            },
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.key.action = Some(action.to_string());
        self
    }

    pub fn rect(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.key.hitbox = Some(RawHitbox::new(x, y, w, h));
        self
    }

    pub fn raw(mut self, hitbox: Option<RawHitbox>) -> Self {
        self.key.hitbox = hitbox;
        self
    }

    pub fn build(self) -> KeyRecord {
        self.key
    }
}

pub fn layout(keys: Vec<KeyRecord>) -> LayoutDescription {
    LayoutDescription { keys }
}

pub const SINGLE_Q: &str = r#"{"keys":[{"label":"q","hitbox":{"x":0,"y":0,"w":10,"h":10}}]}"#;

/// Three 10x10 keys in a row: q, w, e.
pub fn mock_row() -> LayoutDescription {
    layout(vec![
        KeyBuilder::label("q").rect(0, 0, 10, 10).build(),
        KeyBuilder::label("w").rect(10, 0, 10, 10).build(),
        KeyBuilder::label("e").rect(20, 0, 10, 10).build(),
    ])
}
