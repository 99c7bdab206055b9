//! Test builders — ergonomic constructors for `Record` and `Note`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use emprec::{Note, Record};

/// Fluent builder for [`Record`] test fixtures.
///
/// ```rust
/// let record = RecordBuilder::new("Lea")
///     .age(24)
///     .working_years([2019, 2020])
///     .hobby("chess")
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: Record {
                name: name.into(),
                age: 30,
                id: 1,
                salary: 1000,
                working_years: Vec::new(),
                is_working: true,
                notes: Vec::new(),
                hobbies: Vec::new(),
            },
        }
    }

    pub fn age(mut self, age: i64) -> Self {
        self.record.age = age;
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.record.id = id;
        self
    }

    pub fn salary(mut self, salary: i64) -> Self {
        self.record.salary = salary;
        self
    }

    pub fn working_years(mut self, years: impl IntoIterator<Item = i64>) -> Self {
        self.record.working_years = years.into_iter().collect();
        self
    }

    pub fn working(mut self, is_working: bool) -> Self {
        self.record.is_working = is_working;
        self
    }

    pub fn note(mut self, year: i64, working_months: i64, satisfied: bool) -> Self {
        self.record.notes.push(Note {
            year,
            working_months,
            satisfied,
        });
        self
    }

    pub fn hobby(mut self, hobby: impl Into<String>) -> Self {
        self.record.hobbies.push(hobby.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The three records held by every sample document under `data/`.
pub fn sample_records() -> Vec<Record> {
    vec![
        RecordBuilder::new("Lea Vanne")
            .age(24)
            .id(225689)
            .salary(4000)
            .working_years([2019, 2020, 2021])
            .note(2019, 12, true)
            .note(2020, 6, false)
            .hobby("reading")
            .hobby("chess")
            .build(),
        RecordBuilder::new("Luca")
            .age(22)
            .id(225690)
            .salary(4500)
            .working_years([2022, 2023])
            .hobby("climbing")
            .build(),
        RecordBuilder::new("Mira Hollis")
            .age(41)
            .id(225691)
            .salary(6200)
            .working_years([2008, 2012, 2016])
            .working(false)
            .note(2016, 9, true)
            .build(),
    ]
}
