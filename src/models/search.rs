use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Car;

/// Optional constraints narrowing a car listing query.
///
/// String terms are exact, case-sensitive matches. Empty strings count as
/// absent. Price and year bounds are inclusive; an inverted pair is allowed
/// and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CarSearch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
}

fn term(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn within(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

impl CarSearch {
    /// Equality terms as `(field, value)` pairs, skipping absent ones.
    pub fn equality_terms(&self) -> Vec<(&'static str, &str)> {
        [
            ("make", term(&self.make)),
            ("model", term(&self.model)),
            ("fuel_type", term(&self.fuel_type)),
            ("transmission", term(&self.transmission)),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    pub fn matches(&self, car: &Car) -> bool {
        let equal = self.equality_terms().into_iter().all(|(field, value)| match field {
            "make" => car.make == value,
            "model" => car.model == value,
            "fuel_type" => car.fuel_type == value,
            "transmission" => car.transmission == value,
            _ => true,
        });

        equal
            && within(car.price, self.min_price, self.max_price)
            && within(car.year, self.min_year, self.max_year)
    }
}
