// Domain layer - Dashboard documents and rendered images
pub mod dashboard;
pub mod error;
pub mod image;
