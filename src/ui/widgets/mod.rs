pub mod meter;

pub use meter::{ratio_text, RatioMeter};
