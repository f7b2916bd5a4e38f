//! Appliance Cost library
//!
//! This module exposes the core functionality for use in tests
//! and by the terminal front ends.

pub mod app;
pub mod core;
pub mod form;
pub mod i18n;
pub mod pricing;
pub mod registry;
