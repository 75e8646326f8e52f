//! Hashing System
//!
//! Two kinds of hash live here:
//! - `title_hash`: the 32-bit rolling hash that seeds every layout choice.
//! - SHA-256 digests for branding manifests.

use sha2::{Sha256, Digest};
use serde::Serialize;
use serde_json::{Value, to_string};

/// Rolling `h * 31 + unit` hash over UTF-16 code units, 32-bit wrapping,
/// absolute value taken at the end.
///
/// Same title, same seed, on every platform.
pub fn title_hash(s: &str) -> u32 {
    let h = s
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
    h.unsigned_abs()
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    let sorted = sort_value(&v);
    to_string(&sorted)
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(sort_value).collect())
        }
        _ => v.clone()
    }
}

/// Compute manifest hash over its canonical JSON
pub fn compute_manifest_hash<T: Serialize>(manifest: &T) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(manifest)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_hash_golden() {
        let golden = [
            ("", 0),
            ("a", 97),
            ("abc", 96354),
            ("hello", 99162322),
            ("Hello World", 862545276),
            ("Machine Learning Basics", 1879873358),
            ("Python for Everyone", 941250470),
            ("Go", 2312),
        ];
        for (s, expected) in golden {
            assert_eq!(title_hash(s), expected, "hash({:?})", s);
        }
    }

    #[test]
    fn test_title_hash_uses_utf16_units() {
        // astral characters contribute two surrogate units
        assert_eq!(title_hash("🚀 Rocket Science"), 1767908597);
        assert_eq!(title_hash("Égalité"), 1041319701);
    }

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"z": 1, "a": 2, "m": 3});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(canonical, r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_manifest_hash_stable() {
        let manifest = json!({
            "theme": "python",
            "engine_version": "1.0.0"
        });
        let h1 = compute_manifest_hash(&manifest).unwrap();
        let h2 = compute_manifest_hash(&manifest).unwrap();
        assert_eq!(h1, h2);
    }
}
