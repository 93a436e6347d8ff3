pub mod data_structure;
pub mod error;
pub mod interface;
