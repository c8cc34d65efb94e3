//! # Atrium Access
//!
//! Role-to-capability resolution for the Atrium dashboard panel.
//!
//! ## Components
//!
//! - `CapabilitySet` - Capability flags derived from a role snapshot
//! - `RoleAccessResolver` - Content-keyed memoization of the derivation

pub mod capability;
pub mod resolver;

pub use capability::{CapabilitySet, NavPermissions};
pub use resolver::RoleAccessResolver;
