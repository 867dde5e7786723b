//! Small parsing helpers shared by the controller and model layers.

pub mod parse;
