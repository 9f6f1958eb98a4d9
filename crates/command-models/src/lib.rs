//! Core data models for the command resource service.
//!
//! This crate provides the persisted [`Command`] row and the validated
//! [`NewCommand`] value used to create one.

pub mod command;

pub use command::{Command, CommandId, NewCommand, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
