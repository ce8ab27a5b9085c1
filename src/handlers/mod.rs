pub mod panel;
pub mod translate;
