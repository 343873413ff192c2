pub mod config;
pub mod filter;
pub mod prefs;
pub mod todo;

pub use config::*;
pub use filter::*;
pub use prefs::*;
pub use todo::*;
