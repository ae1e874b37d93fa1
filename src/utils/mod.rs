pub mod expiration;
pub mod url_validator;

pub use expiration::{ExpirationInput, normalize_expiration};
pub use url_validator::validate_url;

/// Generate a random alphanumeric identifier of the given length.
pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// Draw a random identifier length from the configured range.
pub fn random_code_length(min: usize, max: usize) -> usize {
    if min >= max {
        return min;
    }
    rand::random_range(min..=max)
}
