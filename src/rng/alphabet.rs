//! Character sets used for string derivation.

/// Characters for identifiers. Excludes the confusable glyphs `0`, `1`,
/// `I`, `l` and `O`.
pub const UNMISTAKABLE: &str = "23456789ABCDEFGHJKLMNPQRSTWXYZabcdefghijkmnopqrstuvwxyz";

/// URL-safe base64 characters for secrets (6 bits of entropy each).
pub const BASE64_URL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Lowercase hexadecimal digits.
pub const HEX: &str = "0123456789abcdef";
