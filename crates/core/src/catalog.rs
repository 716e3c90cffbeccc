//! In-memory vehicle catalog and the option lists derived from it.

use serde::{Deserialize, Serialize};

use crate::domain::vehicle::{BodyCategory, FuelType, Origin, Vehicle, VehicleId};
use crate::labels::brand_label;

/// Default lifestyle vocabulary, used when a catalog carries no tags of its own.
pub const DEFAULT_LIFESTYLE_TAGS: &[&str] = &[
    "출퇴근용",
    "캠핑",
    "아이와 함께",
    "드라이빙 매니아",
    "시내주행",
    "비즈니스",
    "주말여행",
    "첫 차",
];

/// How many entries the popularity ranking exposes.
pub const RANKING_SIZE: usize = 5;

/// Ordered, read-only collection of vehicle records. Replacing the catalog is
/// an atomic swap performed between computations by whoever owns it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandOption {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandGroups {
    pub domestic: Vec<BrandOption>,
    pub imported: Vec<BrandOption>,
}

/// One row of the popularity top-5.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub value: u32,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn find(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    /// Brands present in the catalog, split by origin and sorted by label.
    pub fn brand_groups(&self) -> BrandGroups {
        let mut seen: Vec<&str> = Vec::new();
        let mut groups = BrandGroups::default();
        for vehicle in &self.vehicles {
            if seen.contains(&vehicle.brand.as_str()) {
                continue;
            }
            seen.push(&vehicle.brand);
            let option = BrandOption {
                id: vehicle.brand.clone(),
                label: brand_label(&vehicle.brand).to_string(),
            };
            match vehicle.origin {
                Origin::Domestic => groups.domestic.push(option),
                Origin::Imported => groups.imported.push(option),
            }
        }
        groups.domestic.sort_by(|a, b| a.label.cmp(&b.label));
        groups.imported.sort_by(|a, b| a.label.cmp(&b.label));
        groups
    }

    /// Body categories actually present, sorted by wire name.
    pub fn category_options(&self) -> Vec<BodyCategory> {
        let mut options: Vec<BodyCategory> = Vec::new();
        for vehicle in &self.vehicles {
            if !options.contains(&vehicle.category) {
                options.push(vehicle.category);
            }
        }
        options.sort_by_key(|category| category.as_str());
        options
    }

    /// Fuel types actually present, sorted by wire name.
    pub fn fuel_options(&self) -> Vec<FuelType> {
        let mut options: Vec<FuelType> = Vec::new();
        for vehicle in &self.vehicles {
            if !options.contains(&vehicle.fuel_type) {
                options.push(vehicle.fuel_type);
            }
        }
        options.sort_by_key(|fuel| fuel.as_str());
        options
    }

    /// Lifestyle tags in use, sorted; falls back to the default vocabulary
    /// when no record carries any tags.
    pub fn lifestyle_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for vehicle in &self.vehicles {
            for tag in &vehicle.lifestyles {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        if tags.is_empty() {
            return DEFAULT_LIFESTYLE_TAGS.iter().map(|tag| (*tag).to_string()).collect();
        }
        tags.sort();
        tags
    }

    /// Top-5 by view count descending, price ascending on ties. When no record
    /// carries a view count the entries get relative values 5 down to 1.
    pub fn popularity_ranking(&self) -> Vec<RankingEntry> {
        let mut sorted: Vec<&Vehicle> = self.vehicles.iter().collect();
        sorted.sort_by(|a, b| {
            b.popularity().cmp(&a.popularity()).then_with(|| a.price.cmp(&b.price))
        });
        let top: Vec<&Vehicle> = sorted.into_iter().take(RANKING_SIZE).collect();
        let has_view_count = top.iter().any(|vehicle| vehicle.popularity() > 0);
        top.iter()
            .enumerate()
            .map(|(index, vehicle)| RankingEntry {
                name: format!("{} {}", brand_label(&vehicle.brand), vehicle.model),
                value: if has_view_count {
                    vehicle.popularity()
                } else {
                    (RANKING_SIZE - index) as u32
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::QualitySpecs;

    fn vehicle(id: &str, brand: &str, origin: Origin, price: u32, views: Option<u32>) -> Vehicle {
        Vehicle {
            id: VehicleId(id.to_string()),
            brand: brand.to_string(),
            model: id.to_uppercase(),
            price,
            view_count: views,
            fuel_type: FuelType::Gasoline,
            category: BodyCategory::Sedan,
            year: 2025,
            image: String::new(),
            tags: Vec::new(),
            lifestyles: Vec::new(),
            origin,
            specs: QualitySpecs::default(),
            ai_comment: String::new(),
        }
    }

    #[test]
    fn find_locates_record_by_id() {
        let catalog = Catalog::new(vec![vehicle("a", "KIA", Origin::Domestic, 3000, None)]);
        assert!(catalog.find(&VehicleId("a".to_string())).is_some());
        assert!(catalog.find(&VehicleId("b".to_string())).is_none());
    }

    #[test]
    fn brand_groups_split_by_origin_and_sort_by_label() {
        let catalog = Catalog::new(vec![
            vehicle("a", "HYUNDAI", Origin::Domestic, 3000, None),
            vehicle("b", "GENESIS", Origin::Domestic, 6000, None),
            vehicle("c", "BMW", Origin::Imported, 5600, None),
            vehicle("d", "HYUNDAI", Origin::Domestic, 2800, None),
        ]);
        let groups = catalog.brand_groups();
        let domestic: Vec<&str> = groups.domestic.iter().map(|b| b.id.as_str()).collect();
        // 제네시스 < 현대 in label order
        assert_eq!(domestic, vec!["GENESIS", "HYUNDAI"]);
        assert_eq!(groups.imported.len(), 1);
    }

    #[test]
    fn ranking_orders_by_views_then_price() {
        let catalog = Catalog::new(vec![
            vehicle("cheap", "KIA", Origin::Domestic, 2000, None),
            vehicle("hot", "KIA", Origin::Domestic, 4000, Some(900)),
            vehicle("warm", "KIA", Origin::Domestic, 3000, Some(400)),
        ]);
        let ranking = catalog.popularity_ranking();
        assert_eq!(ranking[0].name, "기아 HOT");
        assert_eq!(ranking[0].value, 900);
        assert_eq!(ranking[2].name, "기아 CHEAP");
        assert_eq!(ranking[2].value, 0);
    }

    #[test]
    fn ranking_without_view_counts_uses_relative_values() {
        let catalog = Catalog::new(vec![
            vehicle("a", "KIA", Origin::Domestic, 2000, None),
            vehicle("b", "KIA", Origin::Domestic, 3000, None),
        ]);
        let ranking = catalog.popularity_ranking();
        assert_eq!(ranking[0].value, 5);
        assert_eq!(ranking[1].value, 4);
        // price ascending decides the order when all counters are absent
        assert_eq!(ranking[0].name, "기아 A");
    }

    #[test]
    fn lifestyle_tags_fall_back_to_default_vocabulary() {
        let catalog = Catalog::new(vec![vehicle("a", "KIA", Origin::Domestic, 3000, None)]);
        assert_eq!(catalog.lifestyle_tags().len(), DEFAULT_LIFESTYLE_TAGS.len());
    }
}
