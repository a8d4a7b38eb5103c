//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL de `migrations/`.

pub mod equipment;
pub mod operation_order;
pub mod vessel;
