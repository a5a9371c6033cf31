//! Cross-cutting helpers shared by the wiring layer.

pub mod config;
