// Infrastructure layer - External dependencies and adapters
pub mod cloudwatch_repository;
pub mod config;
pub mod logging;
pub mod rate_limiter;
