//! Korean display labels for catalog enums and brand ids.

use crate::domain::vehicle::{BodyCategory, FuelType, Origin};

/// Brand id to Korean label, covering every brand the importers can emit.
pub const BRAND_LABELS: &[(&str, &str)] = &[
    ("HYUNDAI", "현대"),
    ("KIA", "기아"),
    ("GENESIS", "제네시스"),
    ("TESLA", "테슬라"),
    ("BMW", "BMW"),
    ("MERCEDES-BENZ", "벤츠"),
    ("AUDI", "아우디"),
    ("TOYOTA", "토요타"),
    ("HONDA", "혼다"),
    ("VOLVO", "볼보"),
    ("PORSCHE", "포르쉐"),
    ("RENAULT", "르노코리아"),
    ("CHEVROLET", "쉐보레"),
    ("KGM", "KGM"),
    ("BYD", "BYD"),
];

/// Falls back to the raw brand id for brands without a Korean label.
pub fn brand_label(brand: &str) -> &str {
    BRAND_LABELS
        .iter()
        .find(|(id, _)| *id == brand)
        .map(|(_, label)| *label)
        .unwrap_or(brand)
}

pub fn fuel_label(fuel: FuelType) -> &'static str {
    match fuel {
        FuelType::Gasoline => "가솔린",
        FuelType::Diesel => "디젤",
        FuelType::Hybrid => "하이브리드",
        FuelType::Electric => "전기차",
        FuelType::Lpg => "LPG",
    }
}

pub fn category_label(category: BodyCategory) -> &'static str {
    match category {
        BodyCategory::Sedan => "세단",
        BodyCategory::Suv => "SUV",
        BodyCategory::Mpv => "MPV",
    }
}

pub fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Domestic => "국산",
        Origin::Imported => "수입",
    }
}

/// Thousands-separated price, e.g. `3489` renders as `3,489`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_brand_maps_to_korean_label() {
        assert_eq!(brand_label("MERCEDES-BENZ"), "벤츠");
    }

    #[test]
    fn unknown_brand_falls_back_to_raw_id() {
        assert_eq!(brand_label("RIVIAN"), "RIVIAN");
    }

    #[test]
    fn price_grouping_inserts_commas() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(987), "987");
        assert_eq!(format_price(3489), "3,489");
        assert_eq!(format_price(1234567), "1,234,567");
    }
}
