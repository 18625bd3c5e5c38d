pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use frameworks::runtime::{RunSettings, run, run_with_config};
