//! Dense distance matrix.

use crate::models::City;

/// A dense n×n distance matrix stored in row-major order.
///
/// TTP benchmark instances use Euclidean distances rounded up to the next
/// integer (`CEIL_2D`), which is what [`DistanceMatrix::from_cities`] computes.
///
/// # Examples
///
/// ```
/// use u_ttp::models::City;
/// use u_ttp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 3.0),
///     City::new(4.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(dm.get(0, 1), 3.0);
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.tour_length(&[0, 1, 2]), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a ceil-rounded Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of a closed tour: `tour[0] → ... → tour[n-1] → tour[0]`.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let mut dist: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        dist += self.get(tour[tour.len() - 1], tour[0]);
        dist
    }

    /// Returns the nearest city to `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
