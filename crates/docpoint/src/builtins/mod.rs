pub(crate) mod database;
pub(crate) mod functions;
pub(crate) mod types;

#[cfg(test)]
#[path = "../../tests/src/builtins_tests.rs"]
mod tests;

pub use self::{
    database::{is_predeclared, lookup, package},
    types::{BuiltinFunc, BuiltinPackage, BuiltinType, BuiltinValue},
};
