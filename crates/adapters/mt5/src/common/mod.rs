pub mod consts;
pub mod credential;
pub mod enums;
pub mod parse;
#[cfg(test)]
pub mod testing;

pub use consts::*;
pub use credential::*;
pub use enums::*;
