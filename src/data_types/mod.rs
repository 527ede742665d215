pub mod data;
pub mod plot_configs;
pub mod state;

pub use data::*;
pub use plot_configs::*;
pub use state::*;
