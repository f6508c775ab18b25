pub mod orchestrator;
pub mod prompts;
pub mod providers;

pub use orchestrator::ConceptOrchestrator;
