//! Domain types: payment types, the catalog and application state, and the catalog port.

pub mod app_state;
pub mod catalog;
pub mod payment_type;
pub mod ports;
