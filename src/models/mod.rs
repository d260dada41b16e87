pub mod car;
pub mod catalog;
pub mod search;

pub use car::Car;
pub use catalog::{MakesResponse, MessageResponse, ModelsResponse};
pub use search::CarSearch;
