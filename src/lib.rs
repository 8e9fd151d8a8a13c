//! AskAneeq - Personal-Profile Chatbot Connector
//!
//! This crate exposes a fixed set of profile query tools over a small RPC
//! surface, ranks free-text questions against the bundled profile with a
//! keyword relevance engine, and records tool usage in an analytics event
//! store consumed by an authenticated admin API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
