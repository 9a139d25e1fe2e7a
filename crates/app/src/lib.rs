//! # homecmd-app
//!
//! Application layer — the use-case that turns input lines into device
//! effects.
//!
//! ## Responsibilities
//! - **Parser** — `ACTION_WORDS -> DEVICE_WORDS [-> ARGUMENT_WORDS]` lines
//!   into [`Command`](homecmd_domain::command::Command) values
//! - **Registry** — the fixed name → device mapping, explicitly constructed
//!   and injected (no process-wide singletons)
//! - **Interpreter** — parse → resolve → dispatch, with the full typed
//!   failure taxonomy
//!
//! ## Dependency rule
//! Depends on `homecmd-domain` only. Never performs IO; printing and
//! configuration belong to the binary.

pub mod interpreter;
pub mod parser;
pub mod registry;
