//! Servicios de dominio

pub mod efficiency;

pub use efficiency::compute_efficiency;
