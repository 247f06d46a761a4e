// SPDX-License-Identifier: MPL-2.0
//! Wire-level record for a single photograph.

use serde::Deserialize;

/// A photograph entry from the manifest.
///
/// `id` is opaque and unique within one fetch result; it keys grid cards and
/// thumbnail cache entries. `img_src` points at the image resource, which the
/// thumbnail loader fetches separately. Both fields are immutable; a record
/// only lives as long as the manifest response that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    pub id: String,
    pub img_src: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_manifest_entries_in_order() {
        let body = r#"[{"id":"1","img_src":"http://x/a.jpg"},{"id":"2","img_src":"http://x/b.jpg"}]"#;
        let photos: Vec<Photo> = serde_json::from_str(body).expect("valid manifest");

        assert_eq!(
            photos,
            vec![
                Photo {
                    id: "1".to_string(),
                    img_src: "http://x/a.jpg".to_string(),
                },
                Photo {
                    id: "2".to_string(),
                    img_src: "http://x/b.jpg".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = r#"[{"id":"1"}]"#;
        assert!(serde_json::from_str::<Vec<Photo>>(body).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"[{"id":"1","img_src":"http://x/a.jpg","camera":"MAST"}]"#;
        let photos: Vec<Photo> = serde_json::from_str(body).expect("valid manifest");
        assert_eq!(photos[0].id, "1");
    }
}
