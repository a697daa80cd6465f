pub(crate) mod cli;
mod repl;
mod state;

pub use cli::run;
pub use repl::exec;
pub use state::ShellState;
