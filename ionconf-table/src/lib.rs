pub mod serde_impl;
pub mod table;
pub mod value;

pub use table::Table;
pub use value::{FnResult, Function, ObjectRef, Value};
