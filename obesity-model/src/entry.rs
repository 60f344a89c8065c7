use std::str::FromStr;

use strum::{Display, EnumString};

use crate::bmi::BmiResult;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Exactly 4 values required, you provided {found}")]
    MissingOrMalformedField { found: usize },
    #[error("Invalid age \"{0}\": age must be a whole number greater than zero")]
    InvalidAge(String),
    #[error("Invalid gender \"{0}\": gender must be either Male or Female")]
    InvalidGender(String),
    #[error("Invalid height \"{0}\": height must be a number of centimetres greater than zero")]
    InvalidHeight(String),
    #[error("Invalid weight \"{0}\": weight must be a number of kilograms greater than zero")]
    InvalidWeight(String),
}

/// A single submission, as typed in by the user. Values can only be
/// obtained through validation, so every `UserEntry` is within range.
#[derive(Clone, Debug, PartialEq)]
pub struct UserEntry {
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
}

impl UserEntry {
    pub fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
    ) -> Result<Self, ValidationError> {
        if age == 0 {
            return Err(ValidationError::InvalidAge(age.to_string()));
        }
        if !is_positive(height_cm) {
            return Err(ValidationError::InvalidHeight(height_cm.to_string()));
        }
        if !is_positive(weight_kg) {
            return Err(ValidationError::InvalidWeight(weight_kg.to_string()));
        }
        // Each value can be in range while their ratio overflows.
        if !BmiResult::calculate(height_cm, weight_kg).bmi.is_finite() {
            return Err(ValidationError::InvalidHeight(height_cm.to_string()));
        }
        Ok(Self {
            age,
            gender,
            height_cm,
            weight_kg,
        })
    }

    /// Parse a line of the form `age, gender, height, weight`.
    pub fn parse(line: &str) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        let [age, gender, height, weight] = tokens[..] else {
            return Err(ValidationError::MissingOrMalformedField {
                found: tokens.len(),
            });
        };

        let age = age
            .parse::<i64>()
            .ok()
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok())
            .ok_or_else(|| ValidationError::InvalidAge(age.to_owned()))?;
        let gender = Gender::from_str(gender)
            .map_err(|_| ValidationError::InvalidGender(gender.to_owned()))?;
        let height_cm = parse_positive(height)
            .ok_or_else(|| ValidationError::InvalidHeight(height.to_owned()))?;
        let weight_kg = parse_positive(weight)
            .ok_or_else(|| ValidationError::InvalidWeight(weight.to_owned()))?;

        Self::new(age, gender, height_cm, weight_kg).map_err(|e| match e {
            ValidationError::InvalidHeight(_) => ValidationError::InvalidHeight(height.to_owned()),
            e => e,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn bmi(&self) -> BmiResult {
        BmiResult::calculate(self.height_cm, self.weight_kg)
    }
}

impl TryFrom<&str> for UserEntry {
    type Error = ValidationError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        Self::parse(line)
    }
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

fn parse_positive(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|x| is_positive(*x))
}
