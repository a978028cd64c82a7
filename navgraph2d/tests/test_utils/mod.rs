#![allow(dead_code)]

mod debug;
mod graph_properties;
mod loop_modifiers;

pub use debug::*;
pub use graph_properties::*;
pub use loop_modifiers::*;
