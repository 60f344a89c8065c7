use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    bmi::WeightCategory,
    entry::Gender,
    table::{columns, Row, Table},
};

/// Median of the values: the middle element for an odd count, the mean of
/// the two middle elements for an even count, and `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub median_age: Option<f64>,
    pub median_height: Option<f64>,
    pub median_weight: Option<f64>,
    pub median_bmi: Option<f64>,
}

impl Statistics {
    /// Cells that do not parse are left out of the medians but the row
    /// still counts.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = Row<'a>>) -> Self {
        let mut count = 0;
        let mut ages = Vec::new();
        let mut heights = Vec::new();
        let mut weights = Vec::new();
        let mut bmis = Vec::new();

        for row in rows {
            count += 1;
            ages.extend(row.get_integer(columns::AGE).map(|age| age as f64));
            heights.extend(row.get_real(columns::HEIGHT));
            weights.extend(row.get_real(columns::WEIGHT));
            bmis.extend(row.get_real(columns::BMI));
        }

        Self {
            count,
            median_age: median(&ages),
            median_height: median(&heights),
            median_weight: median(&weights),
            median_bmi: median(&bmis),
        }
    }

    pub fn from_table(table: &Table) -> Self {
        Self::from_rows(table.rows())
    }

    pub fn from_table_filtered(table: &Table, filter: &Filter) -> Self {
        Self::from_rows(table.rows().filter(|row| filter.matches(row)))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparison {
    Above,
    Below,
    Equal,
}

impl Comparison {
    pub fn of(bmi: f64, median: f64) -> Self {
        if bmi > median {
            Comparison::Above
        } else if bmi < median {
            Comparison::Below
        } else {
            Comparison::Equal
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Above => write!(f, "above median"),
            Comparison::Below => write!(f, "below median"),
            Comparison::Equal => write!(f, "equal to median"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    Gender(Gender),
    /// Inclusive on both ends.
    AgeRange { min: u32, max: u32 },
    Category(WeightCategory),
}

impl Filter {
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Filter::Gender(gender) => row
                .get(columns::GENDER)
                .and_then(|g| Gender::from_str(g.trim()).ok())
                == Some(*gender),
            Filter::AgeRange { min, max } => row
                .get_integer(columns::AGE)
                .is_some_and(|age| age >= *min as i64 && age <= *max as i64),
            Filter::Category(category) => row
                .get(columns::CATEGORY)
                .and_then(|c| WeightCategory::from_str(c.trim()).ok())
                == Some(*category),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Gender(gender) => write!(f, "Gender: {}", gender),
            Filter::AgeRange { min, max } => write!(f, "Age: {}-{}", min, max),
            Filter::Category(category) => write!(f, "Category: {}", category),
        }
    }
}
