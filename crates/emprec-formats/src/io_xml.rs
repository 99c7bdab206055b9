//! XML adapter.
//!
//! ```xml
//! <records>
//!   <record>
//!     <name>Lea</name>
//!     <working_years><year>2019</year></working_years>
//!     <notes><note><year>2019</year><working_months>12</working_months><satisfied>true</satisfied></note></notes>
//!     <hobbies><hobby>chess</hobby></hobbies>
//!     ...
//!   </record>
//! </records>
//! ```
//!
//! Scalar children are read with a textual default when the element is
//! absent (`""` for `name`, `"0"` for numbers, `"false"` for booleans), so an
//! XML record never reports a missing scalar. A present but empty element
//! yields `""`. Absent wrapper elements yield empty lists. `name` is
//! whitespace-trimmed; every other text is passed on untouched.

use emprec_core::{RawRecordFields, RawValue};
use roxmltree::{Document, Node};

use crate::{FormatAdapter, SourceFormat};

pub const ROOT: &str = "records";
pub const RECORD: &str = "record";

const RECORD_DEFAULTS: [(&str, &str); 5] = [
    ("name", ""),
    ("age", "0"),
    ("id", "0"),
    ("salary", "0"),
    ("is_working", "false"),
];

const NOTE_DEFAULTS: [(&str, &str); 3] = [
    ("year", "0"),
    ("working_months", "0"),
    ("satisfied", "false"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlAdapter;

impl FormatAdapter for XmlAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn extract(&self, input: &str) -> Result<Vec<RawRecordFields>, String> {
        let doc = Document::parse(input).map_err(|e| format!("invalid XML: {e}"))?;
        let root = doc.root_element();
        if !root.has_tag_name(ROOT) {
            return Err(format!(
                "root element is <{}>, expected <{ROOT}>",
                root.tag_name().name()
            ));
        }

        Ok(root
            .children()
            .filter(|n| n.has_tag_name(RECORD))
            .map(record_fields)
            .collect())
    }
}

fn record_fields(record: Node<'_, '_>) -> RawRecordFields {
    let mut raw = scalars(record, &RECORD_DEFAULTS);
    if let Some(RawValue::Text(name)) = raw.get("name") {
        let name = name.trim().to_string();
        raw.insert("name", RawValue::Text(name));
    }
    raw.insert("working_years", RawValue::Items(items(record, "working_years", "year")));
    raw.insert("hobbies", RawValue::Items(items(record, "hobbies", "hobby")));

    let notes = child(record, "notes")
        .map(|notes| {
            notes
                .children()
                .filter(|n| n.has_tag_name("note"))
                .map(|note| scalars(note, &NOTE_DEFAULTS))
                .collect()
        })
        .unwrap_or_default();
    raw.insert("notes", RawValue::Nested(notes));
    raw
}

fn scalars(node: Node<'_, '_>, defaults: &[(&str, &str)]) -> RawRecordFields {
    let mut raw = RawRecordFields::new();
    for (field, default) in defaults {
        let text = child(node, field)
            .map(|c| c.text().unwrap_or(""))
            .unwrap_or(*default);
        raw.insert(*field, RawValue::Text(text.to_string()));
    }
    raw
}

/// Texts of `<item>` children under `<wrapper>`; elements without text are skipped.
fn items(node: Node<'_, '_>, wrapper: &str, item: &str) -> Vec<String> {
    child(node, wrapper)
        .map(|w| {
            w.children()
                .filter(|n| n.has_tag_name(item))
                .filter_map(|n| n.text())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}
