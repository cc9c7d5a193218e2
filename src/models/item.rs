//! Item type.

/// An item that can be picked up by the thief.
///
/// Items are placed at a city; several items may share the same city.
///
/// # Examples
///
/// ```
/// use u_ttp::models::Item;
///
/// let item = Item::new(20, 5, 2);
/// assert_eq!(item.profit(), 20);
/// assert_eq!(item.weight(), 5);
/// assert_eq!(item.city(), 2);
/// assert_eq!(item.ratio(), Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    profit: u64,
    weight: u64,
    city: usize,
}

impl Item {
    /// Creates a new item.
    pub fn new(profit: u64, weight: u64, city: usize) -> Self {
        Self {
            profit,
            weight,
            city,
        }
    }

    /// Profit gained by carrying this item.
    pub fn profit(&self) -> u64 {
        self.profit
    }

    /// Weight added to the knapsack when carried.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// City where this item is located.
    pub fn city(&self) -> usize {
        self.city
    }

    /// Profit-to-weight ratio used by greedy picking.
    ///
    /// A weightless item with positive profit ranks above every weighted
    /// item (`+inf`); a weightless item without profit is not worth picking
    /// and yields `None`.
    pub fn ratio(&self) -> Option<f64> {
        match (self.weight, self.profit) {
            (0, 0) => None,
            (0, _) => Some(f64::INFINITY),
            (w, p) => Some(p as f64 / w as f64),
        }
    }
}
