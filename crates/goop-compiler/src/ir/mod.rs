//! Intermediate representation of one class region.
//!
//! Produced by the member classifier while a class body is scanned and
//! consumed by the code generator when the region closes.

mod class;

pub use class::{ClassIR, FieldIR, MethodIR, Visibility};
