pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod session;
pub mod store;
pub mod visualization;

pub use analysis::{project, Calculator, InvestorDashboard, ProjectionInput, ProjectionResult};
pub use config::PortalConfig;
pub use error::FarmError;
pub use io::{PortalSnapshot, RecordReader, RecordWriter};
pub use models::{Farm, FarmStatus, Partner, PartnerKind};
pub use store::{KeyValueStore, MemoryStore, Portal, SqliteStore};
