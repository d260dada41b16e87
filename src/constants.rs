pub const API_NAME: &str = "[car-dealer-api]";

/// Name of the single collection holding car listings.
pub const CARS_COLLECTION: &str = "cars";

/// Number of listings returned by the featured view.
pub const FEATURED_LIMIT: usize = 3;
