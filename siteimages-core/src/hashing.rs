//! Hashing - SHA-256 for outputs and manifests
//!
//! Every generated file is fingerprinted so two runs can be compared byte for
//! byte, and every template is fingerprinted so a manifest records exactly
//! which parameter tables produced it.

use serde::Serialize;
use serde_json::{to_string, Value};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), sort_value(v))).collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// Hash of the canonical JSON of `manifest`.
pub fn compute_manifest_hash<T: Serialize>(manifest: &T) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(manifest)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// template_hash = sha256(template_id + canonical_template + engine_version)
pub fn compute_template_hash(
    template_id: &str,
    template: &impl Serialize,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(template)?;
    let combined = format!("{}:{}:{}", template_id, canonical, engine_version);
    Ok(sha256_hex(combined.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"z": 1, "a": 2, "m": {"y": 1, "b": [3, {"d": 0, "c": 1}]}});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(canonical, r#"{"a":2,"m":{"b":[3,{"c":1,"d":0}],"y":1},"z":1}"#);
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_template_hash_tracks_parameters() {
        let a = json!({"seed": 42, "size": [1920, 800]});
        let b = json!({"size": [1920, 800], "seed": 42});
        let c = json!({"seed": 43, "size": [1920, 800]});
        let ha = compute_template_hash("hero-home", &a, "1.0.0").unwrap();
        assert_eq!(ha, compute_template_hash("hero-home", &b, "1.0.0").unwrap());
        assert_ne!(ha, compute_template_hash("hero-home", &c, "1.0.0").unwrap());
        assert_ne!(ha, compute_template_hash("hero-home", &a, "1.0.1").unwrap());
    }
}
