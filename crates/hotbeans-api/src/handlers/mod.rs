//! HTTP request handlers organized by domain.

pub mod application;
pub mod chat;
pub mod health;
pub mod root;
pub mod status;
pub mod upload;
pub mod ws;
