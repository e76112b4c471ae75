mod attributes;
mod badge;
mod player;

pub use attributes::*;
pub use badge::*;
pub use player::*;
