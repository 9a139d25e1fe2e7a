//! # homecmd-domain
//!
//! Pure domain model for the homecmd command interpreter.
//!
//! ## Responsibilities
//! - Define **Commands** (the parsed `(action, device, argument)` triple)
//! - Define **Devices** (stateful appliances: garage, boiler, television)
//! - Define **Action tables** (the declared, fixed-arity operations of each
//!   device) and the dispatch through them
//! - Define the typed dispatch errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or IO crates.
//! Parsing and registry lookup live in the `app` crate.

pub mod action;
pub mod command;
pub mod device;
pub mod error;
