pub mod loader;
pub mod reader;
pub mod settings;
pub mod view;

pub use loader::{LoadOutcome, LoadStatus, TypeListLoader};
pub use reader::JsonReader;
pub use settings::SettingsStore;
pub use view::{Direction, ViewParams};
