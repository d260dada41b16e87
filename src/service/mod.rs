pub mod car_service;

#[cfg(test)]
mod car_service_test;

pub use car_service::CarService;
