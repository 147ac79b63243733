pub mod alphabet;
pub mod output;
pub mod search;
pub mod structs;
mod util;
