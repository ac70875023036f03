use glam::Vec3;

use crate::error::{Result, SelectionError};

/// Grid cells per axis. Small and fixed, so the full cube is materialized.
pub const DEFAULT_RESOLUTION: usize = 64;

/// Axis-aligned bounding box over splat means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Componentwise min/max over all points. `None` when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points[1..]
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }
}

/// Fixed-resolution histogram of splat counts over the bounding box.
///
/// Rebuilt from scratch on every filter application. For editor-sized
/// scenes the rebuild is cheap; an incremental update path was considered
/// and skipped.
pub struct DensityGrid {
    bounds: Aabb,
    resolution: usize,
    cells: Vec<u32>,
    max_count: u32,
}

impl DensityGrid {
    pub fn build(points: &[Vec3], resolution: usize) -> Result<Self> {
        let bounds = Aabb::from_points(points).ok_or(SelectionError::EmptyScene)?;

        let mut cells = vec![0u32; resolution * resolution * resolution];
        for &p in points {
            cells[cell_index(bounds, resolution, p)] += 1;
        }

        // N > 0 guarantees at least one occupied cell; the max(1) keeps
        // normalization safe regardless.
        let max_count = cells.iter().copied().max().unwrap_or(0).max(1);

        Ok(Self {
            bounds,
            resolution,
            cells,
            max_count,
        })
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// 3D bin of a point, each component in `[0, resolution)`.
    pub fn cell_of(&self, p: Vec3) -> [usize; 3] {
        [
            bin_axis(p.x, self.bounds.min.x, self.bounds.max.x, self.resolution),
            bin_axis(p.y, self.bounds.min.y, self.bounds.max.y, self.resolution),
            bin_axis(p.z, self.bounds.min.z, self.bounds.max.z, self.resolution),
        ]
    }

    pub fn count_at(&self, p: Vec3) -> u32 {
        self.cells[cell_index(self.bounds, self.resolution, p)]
    }

    /// Local density of a point's cell, normalized to `[0, 1]`.
    pub fn normalized_density(&self, p: Vec3) -> f32 {
        self.count_at(p) as f32 / self.max_count as f32
    }
}

fn cell_index(bounds: Aabb, resolution: usize, p: Vec3) -> usize {
    let x = bin_axis(p.x, bounds.min.x, bounds.max.x, resolution);
    let y = bin_axis(p.y, bounds.min.y, bounds.max.y, resolution);
    let z = bin_axis(p.z, bounds.min.z, bounds.max.z, resolution);
    (z * resolution + y) * resolution + x
}

/// Bin of `value` within `[min, max]` split into `n` equal slots.
/// `value == max` lands in the last bin; a degenerate axis maps to bin 0.
fn bin_axis(value: f32, min: f32, max: f32, n: usize) -> usize {
    if max <= min {
        return 0;
    }
    let t = (value - min) / (max - min);
    ((t * n as f32) as usize).min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use rand::Rng;

    #[test]
    fn test_bins_stay_in_range() {
        let mut rng = rand::rng();
        let points: Vec<Vec3> = (0..2000)
            .map(|_| {
                vec3(
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-3.0..3.0),
                    rng.random_range(0.0..1000.0),
                )
            })
            .collect();

        let grid = DensityGrid::build(&points, DEFAULT_RESOLUTION).unwrap();
        for &p in &points {
            for axis in grid.cell_of(p) {
                assert!(axis < DEFAULT_RESOLUTION);
            }
        }
        // Corners sit exactly on the bounds.
        assert_eq!(grid.cell_of(grid.bounds().min), [0, 0, 0]);
        assert_eq!(
            grid.cell_of(grid.bounds().max),
            [DEFAULT_RESOLUTION - 1; 3]
        );
    }

    #[test]
    fn test_max_bound_maps_to_last_bin() {
        assert_eq!(bin_axis(10.0, 0.0, 10.0, 64), 63);
        assert_eq!(bin_axis(0.0, 0.0, 10.0, 64), 0);
        // Just below the boundary of the last bin.
        assert_eq!(bin_axis(10.0 - 1e-4, 0.0, 10.0, 64), 63);
    }

    #[test]
    fn test_degenerate_axis_maps_to_bin_zero() {
        // All points share y == 2.0; the flat axis must not divide by zero.
        let points = vec![
            vec3(0.0, 2.0, 0.0),
            vec3(1.0, 2.0, 3.0),
            vec3(5.0, 2.0, 1.0),
        ];
        let grid = DensityGrid::build(&points, 8).unwrap();
        for &p in &points {
            assert_eq!(grid.cell_of(p)[1], 0);
        }
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            DensityGrid::build(&[], 8),
            Err(SelectionError::EmptyScene)
        ));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_counts_and_max() {
        // 9 points in one corner cell, 1 in the opposite corner.
        let mut points = vec![vec3(0.0, 0.0, 0.0); 9];
        points.push(vec3(10.0, 10.0, 10.0));

        let grid = DensityGrid::build(&points, 4).unwrap();
        assert_eq!(grid.max_count(), 9);
        assert_eq!(grid.count_at(vec3(0.0, 0.0, 0.0)), 9);
        assert_eq!(grid.count_at(vec3(10.0, 10.0, 10.0)), 1);
        assert!((grid.normalized_density(vec3(10.0, 10.0, 10.0)) - 1.0 / 9.0).abs() < 1e-6);
    }
}
