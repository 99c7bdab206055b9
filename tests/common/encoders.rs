//! Encoders from canonical records back into each source format.
//!
//! Only the tests need these: the binary never writes documents. The output
//! follows the same layout the adapters read, so `encode` followed by
//! `parse_str` must give back the original collection.

use emprec::emprec_formats::io_csv::COLUMNS;
use emprec::{Record, RecordCollection, SourceFormat};

pub fn encode(records: &RecordCollection, format: SourceFormat) -> String {
    match format {
        SourceFormat::Json => serde_json::to_string_pretty(records).unwrap(),
        SourceFormat::Yaml => serde_yaml::to_string(records).unwrap(),
        SourceFormat::Csv => encode_csv(records),
        SourceFormat::Xml => encode_xml(records),
    }
}

fn joined<T: ToString>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn csv_row(r: &Record) -> [String; 10] {
    [
        r.name.clone(),
        r.age.to_string(),
        r.id.to_string(),
        r.salary.to_string(),
        joined(&r.working_years, ","),
        r.is_working.to_string(),
        joined(r.notes.iter().map(|n| n.year), ";"),
        joined(r.notes.iter().map(|n| n.working_months), ";"),
        joined(r.notes.iter().map(|n| n.satisfied), ";"),
        joined(&r.hobbies, ","),
    ]
}

fn encode_csv(records: &RecordCollection) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS).unwrap();
    for record in records {
        writer.write_record(csv_row(record)).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn encode_xml(records: &RecordCollection) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<records>\n");
    for r in records {
        out.push_str("  <record>\n");
        out.push_str(&format!("    <name>{}</name>\n", escape(&r.name)));
        out.push_str(&format!("    <age>{}</age>\n", r.age));
        out.push_str(&format!("    <id>{}</id>\n", r.id));
        out.push_str(&format!("    <salary>{}</salary>\n", r.salary));
        out.push_str("    <working_years>\n");
        for year in &r.working_years {
            out.push_str(&format!("      <year>{year}</year>\n"));
        }
        out.push_str("    </working_years>\n");
        out.push_str(&format!("    <is_working>{}</is_working>\n", r.is_working));
        out.push_str("    <notes>\n");
        for n in &r.notes {
            out.push_str(&format!(
                "      <note><year>{}</year><working_months>{}</working_months><satisfied>{}</satisfied></note>\n",
                n.year, n.working_months, n.satisfied
            ));
        }
        out.push_str("    </notes>\n");
        out.push_str("    <hobbies>\n");
        for hobby in &r.hobbies {
            out.push_str(&format!("      <hobby>{}</hobby>\n", escape(hobby)));
        }
        out.push_str("    </hobbies>\n");
        out.push_str("  </record>\n");
    }
    out.push_str("</records>\n");
    out
}
