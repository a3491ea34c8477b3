//! Mercator: agent execution framework for a marketing-automation platform.
//!
//! This crate provides the cross-cutting machinery that lets independently
//! implemented business-logic units ("agents") be registered, looked up by
//! type, invoked through one polymorphic contract, timed, and have their
//! failures captured as values instead of crashing the caller.
//!
//! # Architecture
//!
//! Mercator follows hexagonal architecture principles:
//!
//! - **Domain**: Envelope and descriptor types with no infrastructure
//!   dependencies
//! - **Ports**: The agent contract every implementation plugs into
//! - **Adapters**: Concrete agents shipped with the framework
//! - **Services**: Execution guard, registry and manager
//!
//! # Modules
//!
//! - [`agent`]: Agent contract, registry, execution guard and manager
//! - [`config`]: Framework configuration loading
//! - [`telemetry`]: Tracing subscriber initialisation

pub mod agent;
pub mod config;
pub mod telemetry;
