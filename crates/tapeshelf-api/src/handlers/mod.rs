pub mod diagnostic;
pub mod upload;
