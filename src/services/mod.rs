pub mod scheduling;
pub mod voice_service;
