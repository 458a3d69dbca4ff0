pub mod models;

pub use models::{BriefingModel, DummyModel, GeminiModel};
