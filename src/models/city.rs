//! City type.

/// A city in a TTP instance, identified by its position in the instance.
///
/// # Examples
///
/// ```
/// use u_ttp::models::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert_eq!(a.distance_to(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city, rounded up to the next integer.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().ceil()
    }
}
