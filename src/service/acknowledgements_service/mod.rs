mod acknowledgements_service;
mod acknowledgements_service_impl;

pub use acknowledgements_service::*;
pub use acknowledgements_service_impl::*;
