use serde::{Deserialize, Serialize};

use crate::domain::vehicle::{BodyCategory, FuelType, Vehicle};
use crate::errors::DomainError;

/// Default budget window shown before the user touches the slider.
pub const DEFAULT_BUDGET: BudgetRange = BudgetRange { min: 1500, max: 8000 };

/// Inclusive budget interval in 10,000-won units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }

    /// Interval width, never zero so proximity math cannot divide by zero.
    pub fn width(&self) -> u32 {
        (self.max - self.min).max(1)
    }

    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        DEFAULT_BUDGET
    }
}

/// Ordering applied to a filtered catalog view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// View count descending, absent counters sort as zero.
    #[default]
    #[serde(rename = "popular")]
    Popularity,
    /// Price ascending.
    Price,
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "popular" | "popularity" => Ok(Self::Popularity),
            "price" => Ok(Self::Price),
            other => Err(DomainError::UnknownVariant { kind: "sort key", value: other.to_string() }),
        }
    }
}

/// The user's active filter selections. Empty sets accept everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub budget: BudgetRange,
    pub fuel_types: Vec<FuelType>,
    pub categories: Vec<BodyCategory>,
    pub lifestyles: Vec<String>,
    pub brands: Vec<String>,
}

impl FilterCriteria {
    pub fn new(budget: BudgetRange) -> Self {
        Self { budget, ..Self::default() }
    }

    pub fn with_fuel_types(mut self, fuel_types: Vec<FuelType>) -> Self {
        self.fuel_types = fuel_types;
        self
    }

    pub fn with_categories(mut self, categories: Vec<BodyCategory>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_lifestyles(mut self, lifestyles: Vec<String>) -> Self {
        self.lifestyles = lifestyles;
        self
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = brands;
        self
    }

    pub fn accepts_fuel(&self, fuel: FuelType) -> bool {
        self.fuel_types.is_empty() || self.fuel_types.contains(&fuel)
    }

    pub fn accepts_category(&self, category: BodyCategory) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }

    pub fn accepts_brand(&self, brand: &str) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|candidate| candidate == brand)
    }

    /// Lifestyle clause: empty filter accepts all, otherwise any overlap.
    pub fn accepts_lifestyles(&self, vehicle: &Vehicle) -> bool {
        self.lifestyles.is_empty()
            || self.lifestyles.iter().any(|tag| vehicle.has_lifestyle(tag))
    }

    /// Active lifestyle filters the vehicle actually carries, in filter order.
    pub fn matched_lifestyles(&self, vehicle: &Vehicle) -> Vec<String> {
        self.lifestyles
            .iter()
            .filter(|tag| vehicle.has_lifestyle(tag))
            .cloned()
            .collect()
    }
}
