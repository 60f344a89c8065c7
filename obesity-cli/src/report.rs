use std::io::{self, Write};

use obesity_model::{BmiResult, Comparison, Statistics};

pub fn write_bmi<W: Write>(out: &mut W, result: &BmiResult) -> io::Result<()> {
    writeln!(out, "Your BMI is: {:.1}", result.bmi)?;
    writeln!(out, "Your weight category is: {}", result.category)
}

/// Writes how `bmi` relates to the median and returns the comparison, or
/// `None` when the store holds no usable BMI values.
pub fn write_comparison<W: Write>(
    out: &mut W,
    bmi: f64,
    stats: &Statistics,
) -> io::Result<Option<Comparison>> {
    match stats.median_bmi {
        Some(median) => {
            let comparison = Comparison::of(bmi, median);
            writeln!(
                out,
                "Your BMI of {:.1} is {} ({:.1}).",
                bmi, comparison, median
            )?;
            Ok(Some(comparison))
        }
        None => {
            writeln!(out, "Unable to compute median BMI: no numeric BMI data stored.")?;
            Ok(None)
        }
    }
}

pub fn write_statistics<W: Write>(
    out: &mut W,
    title: &str,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "  Count: {}", stats.count)?;
    writeln!(out, "  Median age: {}", format_median(stats.median_age, 0))?;
    writeln!(out, "  Median height: {}", format_median(stats.median_height, 0))?;
    writeln!(out, "  Median weight: {}", format_median(stats.median_weight, 0))?;
    writeln!(out, "  Median BMI: {}", format_median(stats.median_bmi, 1))
}

fn format_median(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "n/a".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn statistics_block() {
        let stats = Statistics {
            count: 3,
            median_age: Some(31.0),
            median_height: Some(175.0),
            median_weight: Some(80.0),
            median_bmi: Some(24.66),
        };
        let text = render(|out| write_statistics(out, "Descriptive statistics:", &stats));
        assert_eq!(
            text,
            "Descriptive statistics:\n  Count: 3\n  Median age: 31\n  Median height: 175\n  Median weight: 80\n  Median BMI: 24.7\n"
        );
    }

    #[test]
    fn missing_medians() {
        let text = render(|out| write_statistics(out, "Stats", &Statistics::default()));
        assert!(text.contains("Count: 0"));
        assert!(text.contains("Median BMI: n/a"));
    }

    #[test]
    fn comparison_messages() {
        let stats = Statistics {
            median_bmi: Some(22.0),
            ..Default::default()
        };
        let mut out = Vec::new();
        let comparison = write_comparison(&mut out, 25.0, &stats).unwrap();
        assert_eq!(comparison, Some(Comparison::Above));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your BMI of 25.0 is above median (22.0).\n"
        );

        let mut out = Vec::new();
        let comparison = write_comparison(&mut out, 25.0, &Statistics::default()).unwrap();
        assert_eq!(comparison, None);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("Unable to compute median BMI"));
    }
}
