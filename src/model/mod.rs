pub mod data_core;
pub mod path;
pub mod tree;
