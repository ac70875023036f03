mod error;
mod grid;
mod outlier;

pub use error::{Result, SelectionError};
pub use grid::{Aabb, DensityGrid, DEFAULT_RESOLUTION};
pub use outlier::{sigmoid, OutlierFilter, OutlierThresholds};
