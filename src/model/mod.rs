pub mod config;
pub mod record;
pub mod response;

pub use config::GlobalConfig;
pub use record::DatastoreTypeRecord;
pub use response::ReadResponse;
