//! Manifest document shapes and the pure upsert operation.
//!
//! Two schema versions are in use. The flat manifest maps an application id
//! straight to its bundle URL. The structured manifest maps the same id to a
//! full routing record; records written before the `fallback` field existed
//! simply omit the key, so the field is optional on both read and write.
//!
//! Records deserialize into the typed entry, so a key outside the named
//! fields is accepted on load but not carried through a rewrite. Only the
//! fields below survive a read-modify-write cycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat manifest: application id to bundle URL.
pub type FlatManifest = BTreeMap<String, String>;

/// Structured manifest: application id to routing record.
pub type StructuredManifest = BTreeMap<String, MicrofrontendEntry>;

/// One structured manifest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicrofrontendEntry {
    pub url: String,
    pub appname: String,
    pub namespace: String,
    /// Absent in records written by the v1 updater.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    pub ssr: bool,
}

impl MicrofrontendEntry {
    /// Record built from the v1 argument set. No `fallback` key is written,
    /// and any `fallback` a previous record carried is dropped by the upsert.
    pub fn v1(url: String, appname: String, namespace: String, ssr_raw: &str) -> Self {
        Self {
            url,
            appname,
            namespace,
            fallback: None,
            ssr: ssr_flag(ssr_raw),
        }
    }

    /// Record built from the v2 argument set.
    pub fn v2(
        url: String,
        appname: String,
        namespace: String,
        fallback: String,
        ssr_raw: &str,
    ) -> Self {
        Self {
            url,
            appname,
            namespace,
            fallback: Some(fallback),
            ssr: ssr_flag(ssr_raw),
        }
    }

    /// Placeholder record written by the dual updater when an entry is added
    /// by URL only. The empty fields are expected to be filled in later via
    /// the structured updater.
    pub fn placeholder(url: &str) -> Self {
        Self {
            url: url.to_string(),
            appname: String::new(),
            namespace: String::new(),
            fallback: Some(String::new()),
            ssr: false,
        }
    }
}

/// The SSR flag is true iff the raw argument equals `"true"` ignoring case.
/// Anything else, typos included, is false.
pub fn ssr_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Insert or overwrite the entry for `id`. Overwrites are unconditional and
/// whole-record; no field-level merge with an existing entry occurs.
pub fn upsert<V>(manifest: &mut BTreeMap<String, V>, id: &str, value: V) {
    manifest.insert(id.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssr_flag_is_case_insensitive_true() {
        assert!(ssr_flag("true"));
        assert!(ssr_flag("True"));
        assert!(ssr_flag("TRUE"));
        assert!(ssr_flag("tRuE"));
    }

    #[test]
    fn ssr_flag_rejects_everything_else() {
        assert!(!ssr_flag("false"));
        assert!(!ssr_flag("yes"));
        assert!(!ssr_flag("1"));
        assert!(!ssr_flag(""));
        assert!(!ssr_flag("truthy"));
        assert!(!ssr_flag(" true"));
    }

    #[test]
    fn upsert_inserts_new_entry() {
        let mut manifest = FlatManifest::new();
        upsert(&mut manifest, "svc1", "https://a.example".to_string());
        assert_eq!(manifest["svc1"], "https://a.example");
    }

    #[test]
    fn upsert_overwrites_existing_entry() {
        let mut manifest = FlatManifest::new();
        upsert(&mut manifest, "svc1", "https://a.example".to_string());
        upsert(&mut manifest, "svc1", "https://b.example".to_string());
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest["svc1"], "https://b.example");
    }

    #[test]
    fn v1_record_omits_fallback_key() {
        let entry = MicrofrontendEntry::v1(
            "https://a.example".into(),
            "app".into(),
            "ns".into(),
            "True",
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("fallback"));
        assert!(json.contains("\"ssr\":true"));
    }

    #[test]
    fn v2_record_keeps_fallback_key() {
        let entry = MicrofrontendEntry::v2(
            "https://a.example".into(),
            "app".into(),
            "ns".into(),
            "https://old.example".into(),
            "nope",
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["fallback"], "https://old.example");
        assert_eq!(value["ssr"], false);
    }

    #[test]
    fn placeholder_has_empty_fields_and_ssr_false() {
        let value = serde_json::to_value(MicrofrontendEntry::placeholder("https://a.example")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://a.example",
                "appname": "",
                "namespace": "",
                "fallback": "",
                "ssr": false,
            })
        );
    }

    #[test]
    fn unknown_record_keys_are_dropped_on_rewrite() {
        let raw = r#"{"url":"https://a.example","appname":"app","namespace":"ns","ssr":false,"legacy":"x"}"#;
        let entry: MicrofrontendEntry = serde_json::from_str(raw).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("legacy"));
    }

    #[test]
    fn entry_without_fallback_round_trips() {
        let raw = r#"{"url":"https://a.example","appname":"app","namespace":"ns","ssr":false}"#;
        let entry: MicrofrontendEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.fallback, None);
        assert_eq!(serde_json::to_string(&entry).unwrap(), raw);
    }
}
