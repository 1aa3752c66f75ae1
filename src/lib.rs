pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod layout;

pub use error::{GridError, GridResult};
pub use geometry::Hitbox;
pub use grid::{GestureCurve, Grid};
pub use layout::{KeyRecord, LayoutDescription, RawHitbox};
