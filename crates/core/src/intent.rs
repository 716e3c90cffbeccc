//! Keyword-table intent extraction: maps one free-text message onto candidate
//! filter adjustments plus an optional price. Matching is case-insensitive
//! substring search over the whole message, not tokenization, so several rules
//! may fire at once. The table is an ordered slice because the budget-hint
//! rule is last-match-wins in definition order.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::BudgetRange;
use crate::domain::vehicle::{BodyCategory, FuelType};

const IMPORT_BRANDS: &[&str] =
    &["BMW", "MERCEDES-BENZ", "AUDI", "TESLA", "TOYOTA", "HONDA", "VOLVO", "PORSCHE"];
const DOMESTIC_BRANDS: &[&str] = &["HYUNDAI", "KIA", "GENESIS"];
const GERMAN_BRANDS: &[&str] = &["BMW", "MERCEDES-BENZ", "AUDI", "PORSCHE"];
const JAPANESE_BRANDS: &[&str] = &["TOYOTA", "HONDA"];

/// Qualitative price bucket a trigger word maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BudgetHint {
    Low,
    Mid,
    High,
    Premium,
}

impl BudgetHint {
    fn range(self) -> BudgetRange {
        match self {
            Self::Low => BudgetRange { min: 0, max: 3500 },
            Self::Mid => BudgetRange { min: 2500, max: 5500 },
            Self::High => BudgetRange { min: 5000, max: 10_000 },
            Self::Premium => BudgetRange { min: 7000, max: 15_000 },
        }
    }
}

#[derive(Clone, Copy)]
struct KeywordRule {
    /// Stored lowercase; the input is lowercased once before scanning.
    trigger: &'static str,
    lifestyles: &'static [&'static str],
    fuel_types: &'static [FuelType],
    categories: &'static [BodyCategory],
    brands: &'static [&'static str],
    budget_hint: Option<BudgetHint>,
}

const RULE: KeywordRule = KeywordRule {
    trigger: "",
    lifestyles: &[],
    fuel_types: &[],
    categories: &[],
    brands: &[],
    budget_hint: None,
};

#[rustfmt::skip]
const KEYWORD_RULES: &[KeywordRule] = &[
    // Lifestyles
    KeywordRule { trigger: "출퇴근", lifestyles: &["출퇴근용"], ..RULE },
    KeywordRule { trigger: "통근", lifestyles: &["출퇴근용"], ..RULE },
    KeywordRule { trigger: "회사", lifestyles: &["출퇴근용", "비즈니스"], ..RULE },
    KeywordRule { trigger: "캠핑", lifestyles: &["캠핑", "주말여행"], ..RULE },
    KeywordRule { trigger: "차박", lifestyles: &["캠핑"], ..RULE },
    KeywordRule { trigger: "가족", lifestyles: &["아이와 함께"], ..RULE },
    KeywordRule { trigger: "아이", lifestyles: &["아이와 함께"], ..RULE },
    KeywordRule { trigger: "육아", lifestyles: &["아이와 함께"], ..RULE },
    KeywordRule { trigger: "드라이빙", lifestyles: &["드라이빙 매니아"], ..RULE },
    KeywordRule { trigger: "스포츠", lifestyles: &["드라이빙 매니아"], ..RULE },
    KeywordRule { trigger: "시내", lifestyles: &["시내주행"], ..RULE },
    KeywordRule { trigger: "도심", lifestyles: &["시내주행"], ..RULE },
    KeywordRule { trigger: "비즈니스", lifestyles: &["비즈니스"], ..RULE },
    KeywordRule { trigger: "접대", lifestyles: &["비즈니스"], ..RULE },
    KeywordRule { trigger: "주말", lifestyles: &["주말여행"], ..RULE },
    KeywordRule { trigger: "여행", lifestyles: &["주말여행", "캠핑"], ..RULE },
    KeywordRule { trigger: "첫 차", lifestyles: &["첫 차"], ..RULE },
    KeywordRule { trigger: "초보", lifestyles: &["첫 차"], ..RULE },
    // Fuel types
    KeywordRule { trigger: "전기", fuel_types: &[FuelType::Electric], ..RULE },
    KeywordRule { trigger: "ev", fuel_types: &[FuelType::Electric], ..RULE },
    KeywordRule { trigger: "하이브리드", fuel_types: &[FuelType::Hybrid], ..RULE },
    KeywordRule { trigger: "디젤", fuel_types: &[FuelType::Diesel], ..RULE },
    KeywordRule { trigger: "가솔린", fuel_types: &[FuelType::Gasoline], ..RULE },
    // Categories
    KeywordRule { trigger: "suv", categories: &[BodyCategory::Suv], ..RULE },
    KeywordRule { trigger: "세단", categories: &[BodyCategory::Sedan], ..RULE },
    // Budget buckets; later rules win when several fire
    KeywordRule { trigger: "저렴", budget_hint: Some(BudgetHint::Low), ..RULE },
    KeywordRule { trigger: "싸", budget_hint: Some(BudgetHint::Low), ..RULE },
    KeywordRule { trigger: "경제적", budget_hint: Some(BudgetHint::Low), ..RULE },
    KeywordRule { trigger: "가성비", budget_hint: Some(BudgetHint::Low), ..RULE },
    KeywordRule { trigger: "중간", budget_hint: Some(BudgetHint::Mid), ..RULE },
    KeywordRule { trigger: "고급", budget_hint: Some(BudgetHint::High), ..RULE },
    KeywordRule { trigger: "럭셔리", budget_hint: Some(BudgetHint::Premium), ..RULE },
    KeywordRule { trigger: "프리미엄", budget_hint: Some(BudgetHint::Premium), ..RULE },
    // Domestic brands
    KeywordRule { trigger: "현대", brands: &["HYUNDAI"], ..RULE },
    KeywordRule { trigger: "기아", brands: &["KIA"], ..RULE },
    KeywordRule { trigger: "제네시스", brands: &["GENESIS"], ..RULE },
    // Import brands
    KeywordRule { trigger: "bmw", brands: &["BMW"], ..RULE },
    KeywordRule { trigger: "비엠", brands: &["BMW"], ..RULE },
    KeywordRule { trigger: "벤츠", brands: &["MERCEDES-BENZ"], ..RULE },
    KeywordRule { trigger: "메르세데스", brands: &["MERCEDES-BENZ"], ..RULE },
    KeywordRule { trigger: "아우디", brands: &["AUDI"], ..RULE },
    KeywordRule { trigger: "테슬라", brands: &["TESLA"], ..RULE },
    KeywordRule { trigger: "토요타", brands: &["TOYOTA"], ..RULE },
    KeywordRule { trigger: "혼다", brands: &["HONDA"], ..RULE },
    KeywordRule { trigger: "볼보", brands: &["VOLVO"], ..RULE },
    KeywordRule { trigger: "포르쉐", brands: &["PORSCHE"], ..RULE },
    // Origin groups
    KeywordRule { trigger: "국산", brands: DOMESTIC_BRANDS, ..RULE },
    KeywordRule { trigger: "수입", brands: IMPORT_BRANDS, ..RULE },
    KeywordRule { trigger: "외제", brands: IMPORT_BRANDS, ..RULE },
    KeywordRule { trigger: "수입차", brands: IMPORT_BRANDS, ..RULE },
    KeywordRule { trigger: "독일차", brands: GERMAN_BRANDS, ..RULE },
    KeywordRule { trigger: "일본차", brands: JAPANESE_BRANDS, ..RULE },
];

/// Structured reading of one free-text message. All sets are deduplicated;
/// `exact_price` wins over `budget_range` downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub lifestyles: Vec<String>,
    pub fuel_types: Vec<FuelType>,
    pub categories: Vec<BodyCategory>,
    pub brands: Vec<String>,
    pub budget_range: Option<BudgetRange>,
    pub exact_price: Option<u32>,
}

impl Intent {
    pub fn is_empty(&self) -> bool {
        self.lifestyles.is_empty()
            && self.fuel_types.is_empty()
            && self.categories.is_empty()
            && self.brands.is_empty()
            && self.budget_range.is_none()
            && self.exact_price.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct IntentExtractor;

impl IntentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Intent {
        let normalized = text.to_lowercase();
        let mut intent = Intent::default();

        for rule in KEYWORD_RULES {
            if !normalized.contains(rule.trigger) {
                continue;
            }
            for tag in rule.lifestyles {
                push_unique(&mut intent.lifestyles, tag);
            }
            for fuel in rule.fuel_types {
                if !intent.fuel_types.contains(fuel) {
                    intent.fuel_types.push(*fuel);
                }
            }
            for category in rule.categories {
                if !intent.categories.contains(category) {
                    intent.categories.push(*category);
                }
            }
            for brand in rule.brands {
                push_unique(&mut intent.brands, brand);
            }
            if let Some(hint) = rule.budget_hint {
                intent.budget_range = Some(hint.range());
            }
        }

        intent.exact_price = extract_exact_price(text);
        intent
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

/// Fixed-priority numeric extraction: thousand-unit phrase, then a bare run of
/// four or more digits, then a comma-grouped number. The first pattern that
/// matches anywhere in the input wins and only one price is extracted.
fn extract_exact_price(text: &str) -> Option<u32> {
    let chars: Vec<char> = text.chars().collect();
    thousand_unit_price(&chars)
        .or_else(|| bare_price(&chars))
        .or_else(|| comma_grouped_price(&chars))
}

/// `N천[만][원]` reads as N thousand 10,000-won units, e.g. `5천만원` = 5000.
fn thousand_unit_price(chars: &[char]) -> Option<u32> {
    let mut index = 0;
    while index < chars.len() {
        let (value, end) = match digit_run(chars, index) {
            Some(run) => run,
            None => {
                index += 1;
                continue;
            }
        };
        if chars.get(end) == Some(&'천') {
            return value.checked_mul(1000);
        }
        index = end;
    }
    None
}

/// A bare run of four or more digits reads literally, e.g. `3500만원` = 3500.
fn bare_price(chars: &[char]) -> Option<u32> {
    let mut index = 0;
    while index < chars.len() {
        let Some((value, end)) = digit_run(chars, index) else {
            index += 1;
            continue;
        };
        if end - index >= 4 {
            return Some(value);
        }
        index = end;
    }
    None
}

/// `N,NNN` reads as the concatenated digits, e.g. `3,500만원` = 3500.
fn comma_grouped_price(chars: &[char]) -> Option<u32> {
    let mut index = 0;
    while index < chars.len() {
        let Some((head, end)) = digit_run(chars, index) else {
            index += 1;
            continue;
        };
        if chars.get(end) == Some(&',') {
            let tail: String = chars[end + 1..].iter().take(3).collect();
            if tail.len() == 3 && tail.chars().all(|ch| ch.is_ascii_digit()) {
                if let Ok(value) = format!("{head}{tail}").parse::<u32>() {
                    return Some(value);
                }
            }
        }
        index = end;
    }
    None
}

/// Parses the digit run starting at `start`, returning its value and the index
/// one past the run. Runs that overflow `u32` are skipped.
fn digit_run(chars: &[char], start: usize) -> Option<(u32, usize)> {
    if !chars.get(start).is_some_and(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let mut end = start;
    let mut value: u32 = 0;
    let mut overflowed = false;
    while let Some(ch) = chars.get(end) {
        let Some(digit) = ch.to_digit(10) else { break };
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(next) => next,
            None => {
                overflowed = true;
                0
            }
        };
        end += 1;
    }
    if overflowed {
        return None;
    }
    Some((value, end))
}
