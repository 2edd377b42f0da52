//! Domain Layer
//!
//! Pure logic of the webpage verb without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (HostPlatform, DeployLayout)
//! - `services/` - Domain services (Template substitution)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
