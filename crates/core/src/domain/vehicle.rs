use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    /// Serialized as `ev`, matching the catalog wire format.
    #[serde(rename = "ev")]
    Electric,
    Lpg,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Diesel => "diesel",
            Self::Hybrid => "hybrid",
            Self::Electric => "ev",
            Self::Lpg => "lpg",
        }
    }
}

impl std::str::FromStr for FuelType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gasoline" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "hybrid" => Ok(Self::Hybrid),
            "ev" | "electric" => Ok(Self::Electric),
            "lpg" => Ok(Self::Lpg),
            other => Err(DomainError::UnknownVariant {
                kind: "fuel type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyCategory {
    Sedan,
    Suv,
    Mpv,
}

impl BodyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Mpv => "mpv",
        }
    }
}

impl std::str::FromStr for BodyCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            "mpv" => Ok(Self::Mpv),
            other => Err(DomainError::UnknownVariant {
                kind: "body category",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "domestic")]
    Domestic,
    #[serde(rename = "import")]
    Imported,
}

/// Five editorial quality sub-scores, each in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySpecs {
    #[serde(rename = "price")]
    pub price_value: u8,
    #[serde(rename = "fuel")]
    pub fuel_economy: u8,
    pub design: u8,
    pub space: u8,
    pub safety: u8,
}

impl QualitySpecs {
    pub fn average(&self) -> f64 {
        let total = u32::from(self.price_value)
            + u32::from(self.fuel_economy)
            + u32::from(self.design)
            + u32::from(self.space)
            + u32::from(self.safety);
        f64::from(total) / 5.0
    }

    fn fields(&self) -> [(&'static str, u8); 5] {
        [
            ("price", self.price_value),
            ("fuel", self.fuel_economy),
            ("design", self.design),
            ("space", self.space),
            ("safety", self.safety),
        ]
    }
}

/// One catalog entry. Immutable once loaded; prices are in 10,000-won units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub price: u32,
    /// Popularity counter; absent means unknown and sorts as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u32>,
    pub fuel_type: FuelType,
    pub category: BodyCategory,
    pub year: u16,
    #[serde(default)]
    pub image: String,
    /// Display badges, free text.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Lifestyle-use tags, matched against user-selected lifestyles.
    #[serde(default)]
    pub lifestyles: Vec<String>,
    pub origin: Origin,
    pub specs: QualitySpecs,
    #[serde(default)]
    pub ai_comment: String,
}

impl Vehicle {
    pub fn popularity(&self) -> u32 {
        self.view_count.unwrap_or(0)
    }

    pub fn has_lifestyle(&self, tag: &str) -> bool {
        self.lifestyles.iter().any(|candidate| candidate == tag)
    }

    /// Checks the catalog invariants a record must satisfy on import.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.0.trim().is_empty() {
            return Err(DomainError::EmptyField { id: self.id.0.clone(), field: "id" });
        }
        if self.brand.trim().is_empty() {
            return Err(DomainError::EmptyField { id: self.id.0.clone(), field: "brand" });
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::EmptyField { id: self.id.0.clone(), field: "model" });
        }
        for (field, value) in self.specs.fields() {
            if value > 100 {
                return Err(DomainError::SpecOutOfRange {
                    id: self.id.0.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
