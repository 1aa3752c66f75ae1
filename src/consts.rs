/// Label returned by a point lookup that lands outside every hitbox.
pub const FALLBACK_LABEL: char = 'a';

/// Layout used by the CLI when `--layout` is not given.
pub const DEFAULT_LAYOUT_PATH: &str = "data/layouts/default.json";
