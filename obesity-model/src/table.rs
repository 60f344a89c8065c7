//! Column-addressed view over rows of text cells, where the first row is the
//! header naming the columns.

pub mod columns {
    pub const ID: &str = "id";
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const HEIGHT: &str = "Height";
    pub const WEIGHT: &str = "Weight";
    pub const BMI: &str = "BMI";
    pub const CATEGORY: &str = "Category";

    pub const ALL: [&str; 7] = [ID, AGE, GENDER, HEIGHT, WEIGHT, BMI, CATEGORY];
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(mut rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let header = rows.remove(0);
        Self { header, rows }
    }

    /// Number of rows, not counting the header.
    pub fn data_len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            header: &self.header,
            cells,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    header: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Cell under the named column. Short rows yield `None` for the
    /// trailing columns.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let index = self.header.iter().position(|h| h == name)?;
        self.cells.get(index).map(String::as_str)
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get(name)?.trim().parse().ok()
    }

    pub fn get_real(&self, name: &str) -> Option<f64> {
        self.get(name)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn header_is_not_data() {
        let table = Table::new(rows(&[&["id", "Age"], &["1", "25"], &["2", "30"]]));
        assert_eq!(table.data_len(), 2);
        assert_eq!(
            table.rows().map(|r| r.get("Age")).collect::<Vec<_>>(),
            vec![Some("25"), Some("30")]
        );
        assert_eq!(table.rows().next().unwrap().get("id"), Some("1"));
    }

    #[test]
    fn empty_table() {
        let table = Table::new(vec![]);
        assert_eq!(table.data_len(), 0);
        assert_eq!(table.rows().count(), 0);

        let table = Table::new(rows(&[&columns::ALL]));
        assert_eq!(table.data_len(), 0);
    }

    #[test]
    fn permissive_cells() {
        let table = Table::new(rows(&[
            &["Age", "BMI"],
            &[" 25 ", "24.7"],
            &["abc", ""],
            &["3"],
            &["4", "inf"],
        ]));
        let ages: Vec<_> = table.rows().map(|r| r.get_integer("Age")).collect();
        let bmis: Vec<_> = table.rows().map(|r| r.get_real("BMI")).collect();
        assert_eq!(ages, vec![Some(25), None, Some(3), Some(4)]);
        assert_eq!(bmis, vec![Some(24.7), None, None, None]);
        assert_eq!(table.rows().next().unwrap().get("Missing"), None);
    }
}
