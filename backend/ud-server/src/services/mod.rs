pub mod login_service;
pub mod registration_service;
