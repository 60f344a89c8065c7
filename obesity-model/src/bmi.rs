use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
pub enum WeightCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl WeightCategory {
    /// Lower bounds are exclusive of the category below, so 24.9 is already
    /// overweight and 29.9 is already obese.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            WeightCategory::Underweight
        } else if bmi < 24.9 {
            WeightCategory::NormalWeight
        } else if bmi < 29.9 {
            WeightCategory::Overweight
        } else {
            WeightCategory::Obese
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: WeightCategory,
}

impl BmiResult {
    pub fn calculate(height_cm: f64, weight_kg: f64) -> Self {
        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);
        Self {
            bmi,
            category: WeightCategory::from_bmi(bmi),
        }
    }
}
