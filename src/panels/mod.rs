pub mod defs;
pub mod risk;
pub mod selector;

pub use defs::{PanelDef, lookup};
pub use risk::{RiskLevel, annotate};

#[cfg(test)]
#[path = "../../tests/src_inline/panels/tests.rs"]
mod tests;
