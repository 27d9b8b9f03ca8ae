pub mod controls;
pub mod session;

pub use controls::{run_interactive, write_results, Command, Controls};
pub use session::{LoadStatus, SearchSession};
