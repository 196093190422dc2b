//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that reshape analyzer output
//! into exactly what the text and JSON renderers need.

mod why_read_model;
mod why_read_model_builder;

pub use why_read_model::{RootTreeView, WhyReadModel};
pub use why_read_model_builder::WhyReadModelBuilder;
