pub mod hash_code;
pub mod list;
