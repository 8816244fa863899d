//! Content fingerprints for style equivalence.
//!
//! A value is first converted to a JSON tree and written in canonical form:
//! object keys sorted, no whitespace, absent projection fields as `null`,
//! integral numbers written without a fraction (`14.0` as `14`).
//! The canonical bytes are hashed with SHA-256. Equal fingerprints mean
//! structurally equal input regardless of key order or process.

use crate::model::{Style, StyleEntry};

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Fixed-length digest of a canonicalized value.
///
/// Comparable for equality only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Returns the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

/// Computes the fingerprint of any serializable value.
///
/// Never fails: a value that cannot be represented as JSON (e.g. a map with
/// non-string keys) hashes as `null`.
#[must_use]
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Fingerprint {
    let tree = serde_json::to_value(value).unwrap_or(Value::Null);
    let mut canonical = String::new();
    write_canonical(&tree, &mut canonical);
    Fingerprint(Sha256::digest(canonical.as_bytes()).into())
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        Value::Number(number) => write_number(number, out),
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes a number so that `14`, `14.0` and `-0.0`/`0` render identically.
fn write_number(number: &serde_json::Number, out: &mut String) {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
                #[allow(clippy::cast_possible_truncation)]
                let integral = value as i64;
                out.push_str(&integral.to_string());
                return;
            }
        }
    }
    out.push_str(&number.to_string());
}

/// The subset of a style object that takes part in equivalence checks.
///
/// Every field always serializes, absent ones as `null`, so "no fills" and
/// "empty fills" produce different fingerprints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProjection<'a> {
    /// Border list.
    pub borders: Option<&'a [StyleEntry]>,
    /// Border options.
    pub border_options: Option<&'a Value>,
    /// Blur settings.
    pub blur: Option<&'a Value>,
    /// Fill list.
    pub fills: Option<&'a [StyleEntry]>,
    /// Drop shadow list.
    pub shadows: Option<&'a [StyleEntry]>,
    /// Inner shadow list.
    pub inner_shadows: Option<&'a [StyleEntry]>,
    /// Text attributes.
    pub text_style: Option<&'a Value>,
}

impl<'a> StyleProjection<'a> {
    /// Projects a style; a missing style projects to all-absent fields.
    #[must_use]
    pub fn of(style: Option<&'a Style>) -> Self {
        let Some(style) = style else {
            return Self::default();
        };
        Self {
            borders: style.borders.as_deref(),
            border_options: style.border_options.as_ref(),
            blur: style.blur.as_ref(),
            fills: style.fills.as_deref(),
            shadows: style.shadows.as_deref(),
            inner_shadows: style.inner_shadows.as_deref(),
            text_style: style.text_style.as_ref(),
        }
    }

    /// Fingerprint of this projection.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style(value: Value) -> Style {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn stable_across_calls() {
        let s = style(json!({ "fills": [{ "color": "#000" }] }));
        let a = StyleProjection::of(Some(&s)).fingerprint();
        let b = StyleProjection::of(Some(&s.clone())).fingerprint();
        assert_eq!(a, b);
    }

    #[test]
    fn key_order_is_irrelevant() {
        let a = style(serde_json::from_str(
            r##"{"textStyle":{"font":"Inter","size":12},"fills":[{"color":"#000","isEnabled":true}]}"##,
        )
        .unwrap());
        let b = style(serde_json::from_str(
            r##"{"fills":[{"isEnabled":true,"color":"#000"}],"textStyle":{"size":12,"font":"Inter"}}"##,
        )
        .unwrap());
        assert_eq!(
            StyleProjection::of(Some(&a)).fingerprint(),
            StyleProjection::of(Some(&b)).fingerprint()
        );
    }

    #[test]
    fn integral_floats_hash_like_integers() {
        let int = style(serde_json::from_str(r#"{"textStyle":{"size":14}}"#).unwrap());
        let float = style(serde_json::from_str(r#"{"textStyle":{"size":14.0}}"#).unwrap());
        assert_eq!(
            StyleProjection::of(Some(&int)).fingerprint(),
            StyleProjection::of(Some(&float)).fingerprint()
        );

        let zero = fingerprint(&json!({ "x": 0 }));
        assert_eq!(fingerprint(&json!({ "x": -0.0 })), zero);
        assert_eq!(fingerprint(&json!({ "x": 0.0 })), zero);
    }

    #[test]
    fn fractional_numbers_still_discriminate() {
        assert_ne!(
            fingerprint(&json!({ "size": 14 })),
            fingerprint(&json!({ "size": 14.5 }))
        );
        assert_eq!(
            fingerprint(&json!({ "size": 14.5 })),
            fingerprint(&json!({ "size": 14.5 }))
        );
    }

    #[test]
    fn changed_fill_color_discriminates() {
        let a = style(json!({ "fills": [{ "color": "#000" }] }));
        let b = style(json!({ "fills": [{ "color": "#001" }] }));
        assert_ne!(
            StyleProjection::of(Some(&a)).fingerprint(),
            StyleProjection::of(Some(&b)).fingerprint()
        );
    }

    #[test]
    fn untracked_fields_are_ignored() {
        let a = style(json!({ "do_objectID": "A", "fills": [] }));
        let b = style(json!({ "do_objectID": "B", "contextSettings": {}, "fills": [] }));
        assert_eq!(
            StyleProjection::of(Some(&a)).fingerprint(),
            StyleProjection::of(Some(&b)).fingerprint()
        );
    }

    #[test]
    fn absent_and_empty_lists_differ() {
        let absent = style(json!({}));
        let empty = style(json!({ "fills": [] }));
        assert_ne!(
            StyleProjection::of(Some(&absent)).fingerprint(),
            StyleProjection::of(Some(&empty)).fingerprint()
        );
    }

    #[test]
    fn missing_style_equals_style_without_tracked_fields() {
        let bare = style(json!({ "do_objectID": "x" }));
        assert_eq!(
            StyleProjection::of(None).fingerprint(),
            StyleProjection::of(Some(&bare)).fingerprint()
        );
    }

    #[test]
    fn known_digest_of_empty_projection() {
        let expected = Sha256::digest(
            br#"{"blur":null,"borderOptions":null,"borders":null,"fills":null,"innerShadows":null,"shadows":null,"textStyle":null}"#,
        );
        assert_eq!(
            StyleProjection::of(None).fingerprint().as_bytes()[..],
            expected[..]
        );
    }

    #[test]
    fn hex_rendering() {
        let fp = fingerprint(&json!(null));
        assert_eq!(fp.to_hex().len(), 64);
        assert_eq!(fp.to_string(), fp.to_hex());
    }
}
