pub mod analytics_repository;
pub mod fuel_log_repository;
pub mod trip_repository;
pub mod vehicle_repository;
