//! postgrid-core - Sheet loading, configuration and result storage.

pub mod config;
pub mod document;
pub mod error;
pub mod storage;

pub use config::Config;
pub use document::Document;
pub use error::{PostgridError, Result};

pub use postgrid_engine::engine::{CellRef, Sheet, Token};
