// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

pub trait SuffixGenerator: Send + Sync {
    /// Returns `length` characters drawn from `charset`.
    fn suffix(&self, length: usize, charset: &[u8]) -> String;
}
