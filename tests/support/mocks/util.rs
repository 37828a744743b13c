// tests/support/mocks/util.rs
use std::sync::Mutex;

use unique_slug::application::ports::util::{SlugGenerator, SuffixGenerator};

/// Hands out suffixes in the given order, then repeats the last one.
pub struct ScriptedSuffix {
    queue: Mutex<Vec<String>>,
    last: Mutex<String>,
}

impl ScriptedSuffix {
    pub fn new(suffixes: &[&str]) -> Self {
        let mut queue: Vec<String> = suffixes.iter().map(|s| s.to_string()).collect();
        queue.reverse();
        Self {
            queue: Mutex::new(queue),
            last: Mutex::new("0000".into()),
        }
    }
}

impl SuffixGenerator for ScriptedSuffix {
    fn suffix(&self, _length: usize, _charset: &[u8]) -> String {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.queue.lock().unwrap().pop() {
            *last = next;
        }
        last.clone()
    }
}

/// Leaves text untouched apart from uppercasing, to exercise slug validation.
#[derive(Clone)]
pub struct UpperSlug;

impl SlugGenerator for UpperSlug {
    fn slugify(&self, s: &str) -> String {
        s.to_uppercase()
    }
}
