use obesity_model::{Gender, UserEntry, WeightCategory};

/// A row as it is written to the worksheet. Every cell is stored as text:
/// integers for id, age, height and weight, one decimal place for BMI.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredRecord {
    pub id: u32,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: WeightCategory,
}

impl StoredRecord {
    pub fn new(id: u32, entry: &UserEntry) -> Self {
        let result = entry.bmi();
        Self {
            id,
            age: entry.age(),
            gender: entry.gender(),
            height_cm: entry.height_cm(),
            weight_kg: entry.weight_kg(),
            bmi: result.bmi,
            category: result.category,
        }
    }

    fn bmi_cell(&self) -> String {
        format!("{:.1}", self.bmi)
    }

    /// BMI as it reads back from the worksheet, rounded to one decimal.
    pub fn stored_bmi(&self) -> f64 {
        self.bmi_cell().parse().unwrap_or(self.bmi)
    }
}

impl From<StoredRecord> for Vec<String> {
    fn from(record: StoredRecord) -> Self {
        vec![
            record.id.to_string(),
            record.age.to_string(),
            record.gender.to_string(),
            format!("{:.0}", record.height_cm),
            format!("{:.0}", record.weight_kg),
            record.bmi_cell(),
            record.category.to_string(),
        ]
    }
}

/// Id for the next appended row: its 1-based position among the data rows.
/// `rows` is the full worksheet including the header.
pub fn next_id(rows: &[Vec<String>]) -> u32 {
    let data_rows = rows.len().saturating_sub(1);
    data_rows as u32 + 1
}
