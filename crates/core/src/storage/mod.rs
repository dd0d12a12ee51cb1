//! Storage boundary
//!
//! The engine never touches the filesystem directly; everything flows
//! through the port traits defined here and implemented in the infra layer.

pub mod ports;
