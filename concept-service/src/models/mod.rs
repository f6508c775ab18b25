pub mod concept;
pub mod images;
pub mod request;

pub use concept::{Concept, ConceptResponse, Palette};
pub use images::{ImageSet, View};
pub use request::BuildRequest;
