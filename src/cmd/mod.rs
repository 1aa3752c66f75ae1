pub mod batch;
pub mod curve;
pub mod inspect;
pub mod lookup;
