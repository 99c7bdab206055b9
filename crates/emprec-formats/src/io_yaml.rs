//! YAML adapter.
//!
//! Same shape as the JSON document. The YAML is deserialized straight into a
//! `serde_json::Value` so both formats share one `records` extraction path;
//! mappings with non-string keys are rejected by that conversion.

use emprec_core::RawRecordFields;

use crate::{document, FormatAdapter, SourceFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlAdapter;

impl FormatAdapter for YamlAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Yaml
    }

    fn extract(&self, input: &str) -> Result<Vec<RawRecordFields>, String> {
        let document: serde_json::Value =
            serde_yaml::from_str(input).map_err(|e| format!("invalid YAML: {e}"))?;
        document::records(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emprec_core::RawValue;
    use serde_json::json;

    const DOC: &str = "\
records:
  - name: Lea
    age: 24
    is_working: true
    working_years: [2019, 2020]
";

    #[test]
    fn values_stay_native() {
        let raws = YamlAdapter.extract(DOC).unwrap();
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].get("name"), Some(&RawValue::Native(json!("Lea"))));
        assert_eq!(raws[0].get("is_working"), Some(&RawValue::Native(json!(true))));
        assert_eq!(
            raws[0].get("working_years"),
            Some(&RawValue::Native(json!([2019, 2020])))
        );
    }

    #[test]
    fn empty_document_has_no_records_root() {
        assert!(YamlAdapter.extract("").is_err());
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = YamlAdapter.extract("records: [unclosed").unwrap_err();
        assert!(err.starts_with("invalid YAML"), "{err}");
    }
}
