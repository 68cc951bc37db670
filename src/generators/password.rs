// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use crate::models::PasswordGenerationOptions;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Random password generator backed by the operating system's CSPRNG.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Characters a password may be drawn from under `options`.
    pub fn alphabet(options: &PasswordGenerationOptions) -> Vec<u8> {
        let mut chars = LETTERS.to_vec();
        if options.include_numbers {
            chars.extend_from_slice(DIGITS);
        }
        if options.include_specials {
            chars.extend_from_slice(PUNCTUATION);
        }
        chars
    }

    /// Draw `options.length` characters uniformly, with replacement.
    ///
    /// Length bounds are the caller's business; a length of zero yields an
    /// empty string.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        let chars = Self::alphabet(options);
        let mut rng = OsRng;

        (0..options.length)
            .filter_map(|_| chars.choose(&mut rng).map(|&c| c as char))
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
