//! Paths to the shipped sample documents and small inline documents.

use std::path::PathBuf;

use emprec::SourceFormat;

/// The workspace `data/` directory.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// The shipped sample document for `format`.
pub fn sample_path(format: SourceFormat) -> PathBuf {
    data_dir().join(format!("documents.{format}"))
}

/// A single CSV row with no notes columns populated.
pub const CSV_LEA: &str = "\
name,age,id,salary,working_years,is_working,notes_year,notes_working_months,notes_satisfied,hobbies
Lea,24,1,4000,\"2019,2020\",true,,,,\"reading,chess\"
";

/// One record per format with `salary` absent.
pub fn without_salary(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Json => {
            r#"{"records":[{"name":"Lea","age":24,"id":1,"working_years":[2019],"is_working":true}]}"#
        }
        SourceFormat::Yaml => {
            "records:\n  - name: Lea\n    age: 24\n    id: 1\n    working_years: [2019]\n    is_working: true\n"
        }
        SourceFormat::Csv => "name,age,id,working_years,is_working\nLea,24,1,2019,true\n",
        SourceFormat::Xml => {
            "<records><record><name>Lea</name><age>24</age><id>1</id>\
             <working_years><year>2019</year></working_years><is_working>true</is_working>\
             </record></records>"
        }
    }
}

/// One record per format whose `age` is the text `twenty`.
pub fn age_twenty(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Json => {
            r#"{"records":[{"name":"Lea","age":"twenty","id":1,"salary":4000,"working_years":[2019],"is_working":true}]}"#
        }
        SourceFormat::Yaml => {
            "records:\n  - name: Lea\n    age: twenty\n    id: 1\n    salary: 4000\n    working_years: [2019]\n    is_working: true\n"
        }
        SourceFormat::Csv => "name,age,id,salary,working_years,is_working\nLea,twenty,1,4000,2019,true\n",
        SourceFormat::Xml => {
            "<records><record><name>Lea</name><age>twenty</age><id>1</id><salary>4000</salary>\
             <working_years><year>2019</year></working_years><is_working>true</is_working>\
             </record></records>"
        }
    }
}
