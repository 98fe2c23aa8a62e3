//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain data; components hold them in signals provided via
//! context.

pub mod session;
