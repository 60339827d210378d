//! Service categories considered by the analysis.
//!
//! The enum is closed so weight tables and report ordering are checked at
//! compile time. Declaration order is the canonical report order; `Ord`
//! follows it.
//!
//! # Examples
//! ```
//! use walkability_core::Category;
//!
//! assert_eq!(Category::Pharmacy.as_str(), "pharmacy");
//! assert_eq!(Category::Supermarket.to_string(), "supermarket");
//! assert!(Category::Supermarket < Category::Bank);
//! ```

/// A category of everyday service reachable on foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Grocery shopping.
    Supermarket,
    /// Pharmacies.
    Pharmacy,
    /// Doctors' practices, clinics and hospitals.
    Doctor,
    /// Schools and kindergartens.
    School,
    /// Restaurants, cafés and fast food.
    Restaurant,
    /// Banks and ATMs.
    Bank,
}

impl Category {
    /// Every category in canonical (declaration) order.
    pub const ALL: [Self; 6] = [
        Self::Supermarket,
        Self::Pharmacy,
        Self::Doctor,
        Self::School,
        Self::Restaurant,
        Self::Bank,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use walkability_core::Category;
    ///
    /// assert_eq!(Category::Doctor.as_str(), "doctor");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supermarket => "supermarket",
            Self::Pharmacy => "pharmacy",
            Self::Doctor => "doctor",
            Self::School => "school",
            Self::Restaurant => "restaurant",
            Self::Bank => "bank",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supermarket => "Supermarket",
            Self::Pharmacy => "Pharmacy",
            Self::Doctor => "Doctor",
            Self::School => "School",
            Self::Restaurant => "Restaurant",
            Self::Bank => "Bank",
        }
    }

    /// Weight applied to this category when the caller does not override it.
    ///
    /// The table follows the original service configuration; weights are
    /// normalised at aggregation time, so they need not sum to one.
    #[must_use]
    pub const fn default_weight(self) -> f64 {
        match self {
            Self::Supermarket => 0.25,
            Self::Pharmacy | Self::Doctor => 0.20,
            Self::School => 0.15,
            Self::Restaurant | Self::Bank => 0.10,
        }
    }

    /// Pair the category with its default weight.
    #[must_use]
    pub const fn with_default_weight(self) -> CategoryWeight {
        CategoryWeight {
            category: self,
            weight: self.default_weight(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "supermarket" => Ok(Self::Supermarket),
            "pharmacy" => Ok(Self::Pharmacy),
            "doctor" => Ok(Self::Doctor),
            "school" => Ok(Self::School),
            "restaurant" => Ok(Self::Restaurant),
            "bank" => Ok(Self::Bank),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// A requested category together with the weight in effect for one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryWeight {
    /// The requested category.
    pub category: Category,
    /// Positive weight; validated during aggregation.
    pub weight: f64,
}

impl CategoryWeight {
    /// Pair a category with an explicit weight.
    #[must_use]
    pub const fn new(category: Category, weight: f64) -> Self {
        Self { category, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Category::Bank.to_string(), Category::Bank.as_str());
    }

    #[test]
    fn parsing_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("cinema").unwrap_err();
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn default_weights_are_positive() {
        for category in Category::ALL {
            assert!(category.default_weight() > 0.0);
        }
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut shuffled = vec![Category::Bank, Category::Supermarket, Category::Doctor];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Supermarket, Category::Doctor, Category::Bank]
        );
    }
}
