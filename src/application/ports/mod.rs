// src/application/ports/mod.rs
pub mod util;

pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type SuffixGeneratorPort = dyn util::SuffixGenerator;
