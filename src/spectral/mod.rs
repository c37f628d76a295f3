//! This module provides the discrete energy window over which the transmission
//! quadrature runs

use nalgebra::RealField;
use std::ops::Range;

/// A uniform energy grid, inclusive of both window ends.
///
/// The grid spacing is fixed when the grid is built, and the point energies are
/// recovered as `start + step * i` so two grids over the same window agree bitwise.
#[derive(Debug, Clone)]
pub(crate) struct EnergyGrid<T: Copy + RealField> {
    start: T,
    end: T,
    step: T,
    number_of_points: usize,
}

impl<T: Copy + RealField> EnergyGrid<T> {
    /// Builds a grid of `number_of_points` energies spanning `energy_range`
    pub(crate) fn new(energy_range: Range<T>, number_of_points: usize) -> Self {
        assert!(
            number_of_points > 1,
            "An energy grid needs at least two points"
        );
        let step = (energy_range.end - energy_range.start)
            / T::from_usize(number_of_points - 1).unwrap();
        Self {
            start: energy_range.start,
            end: energy_range.end,
            step,
            number_of_points,
        }
    }

    pub(crate) fn num_points(&self) -> usize {
        self.number_of_points
    }

    /// Width of the full energy window
    pub(crate) fn width(&self) -> T {
        self.end - self.start
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.number_of_points).map(move |i| self.start + self.step * T::from_usize(i).unwrap())
    }
}

#[cfg(test)]
mod test {
    use super::EnergyGrid;
    use approx::assert_relative_eq;

    #[test]
    fn grid_includes_both_window_ends() {
        let grid = EnergyGrid::new(-0.5_f64..1.5, 1001);
        let points: Vec<f64> = grid.points().collect();
        assert_eq!(points.len(), 1001);
        assert_relative_eq!(points[0], -0.5);
        assert_relative_eq!(points[1000], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn grid_spacing_is_uniform() {
        let grid = EnergyGrid::new(0.0_f64..1.0, 11);
        let points: Vec<f64> = grid.points().collect();
        for pair in points.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.1, epsilon = 1e-12);
        }
    }
}
