mod delivery_service;
mod reporter_service;

pub use delivery_service::DeliveryService;
pub use reporter_service::ReporterService;
