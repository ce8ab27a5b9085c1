pub mod aksara;
pub mod panel;
pub mod translate;
