pub mod config;
pub mod generate;
pub mod logging;
pub mod profile;
pub mod render;
pub mod storage;

// Re-export commonly used types for convenience.
pub use config::AppConfig;
pub use generate::{generate, GenerateOutcome, GenerateRequest};
pub use profile::{load_profile, Contact, ExperienceEntry, ProfileError, ProfileRecord};
pub use render::{render, render_with, Document, RenderOptions};
