pub mod views;
mod utils;
#[cfg(test)]
mod tests;

pub use crate::utils::*;
