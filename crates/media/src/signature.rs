use sha1::{Digest, Sha1};

/// Cloudinary request signature.
///
/// Parameters are sorted by name, joined as `k=v` with `&`, the API secret is
/// appended and the whole string is SHA-1 hashed. Empty values are left out.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut params: Vec<_> = params.iter().filter(|(_, value)| !value.is_empty()).collect();
    params.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha1_hex(input: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }

    #[test]
    fn test_sign_params_sorts_keys() {
        let signature = sign_params(&[("timestamp", "1315060510"), ("public_id", "sample")], "abcd");
        assert_eq!(signature, sha1_hex("public_id=sample&timestamp=1315060510abcd"));

        let reordered = sign_params(&[("public_id", "sample"), ("timestamp", "1315060510")], "abcd");
        assert_eq!(signature, reordered);
    }

    #[test]
    fn test_sign_params_skips_empty() {
        let signature = sign_params(&[("timestamp", "1"), ("folder", "")], "s");
        assert_eq!(signature, sha1_hex("timestamp=1s"));
        assert_eq!(signature.len(), 40);
    }
}
