//! concept-service: turns a build idea into a Minecraft build concept plus a
//! set of rendered image views.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
