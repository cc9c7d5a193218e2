//! Immutable TTP problem instance.

use crate::distance::DistanceMatrix;
use crate::error::InstanceError;

use super::{City, Item};

/// A Traveling Thief Problem instance.
///
/// Holds the cities, the symmetric distance matrix, the items, the knapsack
/// capacity, the speed bounds and the renting ratio. Instances are immutable
/// once built and can be shared read-only across concurrent runs.
///
/// A city → items index is computed at construction so that evaluating a
/// solution costs O(n + m).
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let items = vec![Item::new(20, 5, 2)];
/// let instance = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).unwrap();
///
/// assert_eq!(instance.dimension(), 3);
/// assert_eq!(instance.num_items(), 1);
/// assert_eq!(instance.items_at(2), &[0]);
/// assert!(instance.items_at(1).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    cities: Vec<City>,
    distances: DistanceMatrix,
    items: Vec<Item>,
    capacity: u64,
    min_speed: f64,
    max_speed: f64,
    renting_ratio: f64,
    items_at: Vec<Vec<usize>>,
}

impl Instance {
    /// Creates an instance from a precomputed distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError`] if an item refers to a missing city, the
    /// speed bounds are inconsistent or the renting ratio is negative or not
    /// finite.
    pub fn new(
        distances: DistanceMatrix,
        items: Vec<Item>,
        capacity: u64,
        min_speed: f64,
        max_speed: f64,
        renting_ratio: f64,
    ) -> Result<Self, InstanceError> {
        for speed in [min_speed, max_speed] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(InstanceError::InvalidSpeed(speed));
            }
        }
        if min_speed > max_speed {
            return Err(InstanceError::SpeedBounds {
                min: min_speed,
                max: max_speed,
            });
        }
        if !renting_ratio.is_finite() || renting_ratio < 0.0 {
            return Err(InstanceError::InvalidRentingRatio(renting_ratio));
        }

        let dimension = distances.size();
        let mut items_at = vec![Vec::new(); dimension];
        for (idx, item) in items.iter().enumerate() {
            if item.city() >= dimension {
                return Err(InstanceError::ItemCityOutOfRange {
                    item: idx,
                    city: item.city(),
                    dimension,
                });
            }
            items_at[item.city()].push(idx);
        }

        Ok(Self {
            name: String::new(),
            cities: Vec::new(),
            distances,
            items,
            capacity,
            min_speed,
            max_speed,
            renting_ratio,
            items_at,
        })
    }

    /// Creates an instance from city coordinates, computing ceil-rounded
    /// Euclidean distances.
    ///
    /// # Errors
    ///
    /// Same as [`Instance::new`].
    pub fn from_cities(
        cities: Vec<City>,
        items: Vec<Item>,
        capacity: u64,
        min_speed: f64,
        max_speed: f64,
        renting_ratio: f64,
    ) -> Result<Self, InstanceError> {
        let distances = DistanceMatrix::from_cities(&cities);
        let mut instance = Self::new(
            distances,
            items,
            capacity,
            min_speed,
            max_speed,
            renting_ratio,
        )?;
        instance.cities = cities;
        Ok(instance)
    }

    /// Sets the instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Instance name (empty if none was given).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cities.
    pub fn dimension(&self) -> usize {
        self.distances.size()
    }

    /// Number of items.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// City coordinates (empty when built from an explicit matrix).
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Distance between two cities.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// All items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Indices of the items located at `city`.
    pub fn items_at(&self, city: usize) -> &[usize] {
        &self.items_at[city]
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Speed with an empty knapsack.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Speed with a full knapsack.
    pub fn min_speed(&self) -> f64 {
        self.min_speed
    }

    /// Rent paid per unit of travel time.
    pub fn renting_ratio(&self) -> f64 {
        self.renting_ratio
    }

    /// Speed loss per unit of carried weight, `(max - min) / capacity`.
    ///
    /// Zero when the capacity is zero, since nothing with weight can be
    /// carried feasibly.
    pub fn speed_coefficient(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            (self.max_speed - self.min_speed) / self.capacity as f64
        }
    }
}
