//! postgrid_engine - Postfix cell evaluation engine.

pub mod engine;
