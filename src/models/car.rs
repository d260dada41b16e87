use serde::{Deserialize, Serialize};
use validator::Validate;

/// One vehicle listing.
///
/// Documents read from the store carry an extra `_id` field; it is ignored on
/// deserialization and never written back out. Field values are not range
/// checked: any integer id, year, price or mileage and any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub price: i64,
    pub mileage: i64,
    pub color: String,
    pub fuel_type: String,
    pub transmission: String,
    pub engine: String,
    pub features: Vec<String>,
    pub image_url: String,
    pub description: String,
}

impl Car {
    /// Same listing under a different id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_cars;

    #[test]
    fn seed_cars_are_valid() {
        for car in seed_cars() {
            assert!(car.validate().is_ok(), "car {} should be valid", car.id);
        }
    }

    #[test]
    fn unusual_values_are_accepted() {
        let mut car = seed_cars().remove(0);
        car.id = -1;
        car.year = 1885;
        car.make = String::new();
        car.price = -1;
        car.mileage = -5;

        assert!(car.validate().is_ok());
    }

    #[test]
    fn ignores_store_object_id_when_deserializing() {
        let json = serde_json::json!({
            "_id": "6650f0c2a1b2c3d4e5f60718",
            "id": 9,
            "make": "Mazda",
            "model": "CX-5",
            "year": 2020,
            "price": 23000,
            "mileage": 41000,
            "color": "Red",
            "fuel_type": "Gasoline",
            "transmission": "Automatic",
            "engine": "2.5L 4-Cylinder",
            "features": ["Bluetooth"],
            "image_url": "/static/images/mazda.jpg",
            "description": "Clean crossover."
        });

        let car: Car = serde_json::from_value(json).unwrap();
        assert_eq!(car.id, 9);
        assert_eq!(car.features, vec!["Bluetooth".to_string()]);

        let back = serde_json::to_value(&car).unwrap();
        assert!(back.get("_id").is_none());
    }

    #[test]
    fn missing_field_is_a_deserialization_error() {
        let json = serde_json::json!({ "id": 1, "make": "Toyota" });
        assert!(serde_json::from_value::<Car>(json).is_err());
    }
}
