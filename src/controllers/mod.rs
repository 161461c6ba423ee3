pub mod analytics_controller;
pub mod fuel_log_controller;
pub mod trip_controller;
pub mod vehicle_controller;
