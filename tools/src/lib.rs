#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod language;
pub mod overlay;
