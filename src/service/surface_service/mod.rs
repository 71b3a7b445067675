mod html_surface_service;
mod surface_service;

pub use html_surface_service::*;
pub use surface_service::*;
