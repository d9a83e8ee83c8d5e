pub mod evidence;
pub mod translator;

pub use evidence::EvidenceProvider;
pub use translator::{Generator, Translator};
