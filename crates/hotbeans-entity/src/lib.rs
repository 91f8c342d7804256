//! # hotbeans-entity
//!
//! Domain records for Hot Beans Web. Every record struct in this crate is
//! persisted as a JSON document and implements
//! [`hotbeans_core::traits::Document`]. Create payloads carry only the
//! client-supplied fields; ids, timestamps and status are assigned here.

pub mod application;
pub mod chat;
pub mod status;
pub mod upload;
pub mod validation;
