use crate::application::ports::util::{SlugGenerator, SuffixGenerator};
use rand::Rng;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Default, Clone)]
pub struct RandomSuffixGenerator;

impl SuffixGenerator for RandomSuffixGenerator {
    fn suffix(&self, length: usize, charset: &[u8]) -> String {
        if charset.is_empty() {
            return String::new();
        }
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| charset[rng.gen_range(0..charset.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::services::DEFAULT_SUFFIX_CHARSET;

    #[test]
    fn slugify_lowercases_and_collapses_separators() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World!"), "hello-world");
        assert_eq!(slugger.slugify("  Rust -- and   Axum  "), "rust-and-axum");
        assert_eq!(slugger.slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn random_suffix_has_requested_length_and_alphabet() {
        let generator = RandomSuffixGenerator;
        for _ in 0..32 {
            let suffix = generator.suffix(6, DEFAULT_SUFFIX_CHARSET.as_bytes());
            assert_eq!(suffix.len(), 6);
            assert!(suffix.bytes().all(|b| DEFAULT_SUFFIX_CHARSET.as_bytes().contains(&b)));
        }
    }

    #[test]
    fn random_suffix_with_single_char_charset_is_constant() {
        assert_eq!(RandomSuffixGenerator.suffix(4, b"z"), "zzzz");
        assert_eq!(RandomSuffixGenerator.suffix(4, b""), "");
    }
}
