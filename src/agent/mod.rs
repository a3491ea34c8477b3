//! Agent execution framework.
//!
//! Heterogeneous agents (content generation, SEO, email, social, support,
//! ads and so on) are registered by type name, constructed on demand, and
//! invoked through a single contract whose every call passes through an
//! execution guard. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
