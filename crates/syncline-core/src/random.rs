// Random string generation for state values and nonces.

/// URL-safe characters, usable in query strings without escaping.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Generate a random string of the given length using URL-safe characters.
///
/// Used for CSRF state values and OAuth 1.0a nonces. Not suitable for
/// key material.
pub fn generate_random_string(length: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
