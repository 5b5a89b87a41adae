mod builder;
mod error;
mod io;
mod roster;
mod spec;

pub use builder::RosterBuilder;
pub use error::RosterError;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use roster::Roster;
pub use spec::{PlayerSpec, RosterSpec};
