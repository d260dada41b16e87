use crate::models::Car;

#[allow(clippy::too_many_arguments)]
fn car(
    id: i64,
    make: &str,
    model: &str,
    year: i64,
    price: i64,
    mileage: i64,
    color: &str,
    fuel_type: &str,
    transmission: &str,
    engine: &str,
    features: &[&str],
    image_url: &str,
    description: &str,
) -> Car {
    Car {
        id,
        make: make.to_string(),
        model: model.to_string(),
        year,
        price,
        mileage,
        color: color.to_string(),
        fuel_type: fuel_type.to_string(),
        transmission: transmission.to_string(),
        engine: engine.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image_url: image_url.to_string(),
        description: description.to_string(),
    }
}

/// Reference inventory loaded by the `seed` binary and the in-memory store.
pub fn seed_cars() -> Vec<Car> {
    vec![
        car(
            1,
            "Toyota",
            "Camry",
            2022,
            28500,
            15000,
            "Silver",
            "Hybrid",
            "CVT",
            "2.5L 4-Cylinder",
            &["Leather Seats", "Sunroof", "Navigation", "Backup Camera", "Bluetooth"],
            "/static/images/2024-Toyota-Camry-rendering-front.jpg",
            "Excellent condition Toyota Camry with low mileage and premium features.",
        ),
        car(
            2,
            "Honda",
            "Accord",
            2023,
            32000,
            8000,
            "White",
            "Gasoline",
            "Automatic",
            "1.5L Turbo 4-Cylinder",
            &["Heated Seats", "Apple CarPlay", "Android Auto", "Lane Assist", "Blind Spot Monitor"],
            "/static/images/2018_Honda_Accord_Touring.jpg",
            "Nearly new Honda Accord with advanced safety features and modern technology.",
        ),
        car(
            3,
            "BMW",
            "3 Series",
            2021,
            45000,
            25000,
            "Black",
            "Gasoline",
            "Automatic",
            "2.0L Turbo 4-Cylinder",
            &["Premium Sound", "Leather Interior", "Sport Package", "Heated Seats", "Navigation"],
            "/static/images/BMW-rendering-front.jpg",
            "Luxury BMW 3 Series with sport package and premium amenities.",
        ),
        car(
            4,
            "Mercedes-Benz",
            "C-Class",
            2022,
            50000,
            10000,
            "White",
            "Gasoline",
            "Automatic",
            "2.0L Turbo 4-Cylinder",
            &["Premium Sound", "Leather Interior", "Sport Package", "Heated Seats", "Navigation"],
            "/static/images/Mercedes-Benz-2024.jpg",
            "Luxury Mercedes-Benz C-Class with sport package and premium amenities.",
        ),
        car(
            5,
            "Audi",
            "A4",
            2023,
            40000,
            15000,
            "Black",
            "Gasoline",
            "Automatic",
            "2.0L Turbo 4-Cylinder",
            &["Premium Sound", "Leather Interior", "Sport Package", "Heated Seats", "Navigation"],
            "/static/images/Audi-2024.jpg",
            "Luxury Audi A4 with sport package and premium amenities.",
        ),
        car(
            6,
            "Tesla",
            "Model 3",
            2024,
            50000,
            10000,
            "White",
            "Electric",
            "Automatic",
            "Electric",
            &[
                "Autopilot",
                "Premium Sound",
                "Leather Interior",
                "Sport Package",
                "Heated Seats",
                "Navigation",
            ],
            "/static/images/Tesla-2024.jpg",
            "Luxury Tesla Model 3 with autopilot and premium amenities.",
        ),
    ]
}
