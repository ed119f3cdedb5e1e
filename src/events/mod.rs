pub mod pointer;
pub mod visibility;

pub use pointer::{wire_input_handlers, InputWiring};
pub use visibility::wire_visibility;
