pub mod engine;

pub use engine::TranslateEngine;
