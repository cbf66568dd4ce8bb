//! Salt generation for the password core

pub mod salt_generator;

pub use salt_generator::*;
