pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod hash;
pub mod layout;
pub mod params;
pub mod sequence;
pub mod session;
pub mod theme;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use layout::*;
pub use params::*;
pub use session::*;
pub use theme::*;
