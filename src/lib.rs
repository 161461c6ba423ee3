//! Fuel Tracker
//!
//! API para registrar cargas de combustible y viajes por vehículo, con
//! eficiencia derivada del odómetro y un reporte mensual de consumo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
