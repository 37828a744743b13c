// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod predicates;
pub mod util;

pub use predicates::{AlwaysTaken, CountingPredicate};
pub use util::{ScriptedSuffix, UpperSlug};
