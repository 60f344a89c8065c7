use std::str::FromStr;

use obesity_model::{Filter, Gender, WeightCategory};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Gender,
    AgeRange,
    Category,
    Quit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "g" | "G" => Some(MenuChoice::Gender),
            "a" | "A" => Some(MenuChoice::AgeRange),
            "c" | "C" => Some(MenuChoice::Category),
            "q" | "Q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            MenuChoice::Gender => "Gender (Male or Female): ",
            MenuChoice::AgeRange => "Age range, e.g. 20-30: ",
            MenuChoice::Category => "Category (Underweight, Normal weight, Overweight, Obese): ",
            MenuChoice::Quit => "",
        }
    }

    /// Builds the filter for this choice from the user's argument.
    pub fn filter(&self, argument: &str) -> Result<Filter, String> {
        let argument = argument.trim();
        match self {
            MenuChoice::Gender => Gender::from_str(argument)
                .map(Filter::Gender)
                .map_err(|_| format!("\"{}\" is not Male or Female", argument)),
            MenuChoice::AgeRange => parse_age_range(argument)
                .ok_or_else(|| format!("\"{}\" is not a valid age range", argument)),
            MenuChoice::Category => WeightCategory::from_str(argument)
                .map(Filter::Category)
                .map_err(|_| format!("\"{}\" is not a weight category", argument)),
            MenuChoice::Quit => Err("nothing to filter".to_owned()),
        }
    }
}

fn parse_age_range(s: &str) -> Option<Filter> {
    let (min, max) = s.split_once('-')?;
    let min = min.trim().parse::<u32>().ok()?;
    let max = max.trim().parse::<u32>().ok()?;
    (min <= max).then_some(Filter::AgeRange { min, max })
}
