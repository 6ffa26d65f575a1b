pub mod branding;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod formatting;
pub mod resolver;
pub mod sampling;
pub mod teams;
pub mod types;
pub mod urls;

#[cfg(any(test, feature = "development"))]
pub mod dev;
#[cfg(any(test, feature = "development"))]
pub mod fixtures;

pub use resolver::{ColorResolver, ResolverSettings};
pub use teams::lookup_declared_color;
pub use types::{BrandColor, Strategy, TeamId};
