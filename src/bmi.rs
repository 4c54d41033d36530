//! Body Mass Index calculator
//!
//! BMI = weight (kg) / height² (m²), classified with the WHO adult bands.

use crate::error::{AssistError, AssistResult};
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};

const RULE: &str = "========================================";

/// WHO weight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        };
        f.write_str(label)
    }
}

/// Compute BMI from kilograms and metres
pub fn calculate(weight_kg: f64, height_m: f64) -> AssistResult<f64> {
    if !(weight_kg.is_finite() && height_m.is_finite()) || weight_kg <= 0.0 || height_m <= 0.0 {
        return Err(AssistError::InvalidInput(
            "Height and weight must be positive values for BMI calculation.".to_string(),
        ));
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Band a BMI value; bands are contiguous so every value lands somewhere
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if bmi < 25.0 {
        Category::Normal
    } else if bmi < 30.0 {
        Category::Overweight
    } else {
        Category::Obesity
    }
}

/// Round to two decimals for display and JSON
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A finished calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: Category,
}

impl BmiReport {
    pub fn new(weight_kg: f64, height_m: f64) -> AssistResult<Self> {
        let bmi = calculate(weight_kg, height_m)?;
        Ok(Self {
            weight_kg,
            height_m,
            bmi,
            category: classify(bmi),
        })
    }

    /// Height given in centimetres, as the web form sends it
    pub fn from_centimeters(weight_kg: f64, height_cm: f64) -> AssistResult<Self> {
        Self::new(weight_kg, height_cm / 100.0)
    }

    pub fn render(&self) -> String {
        format!(
            "\n{RULE}\n--- Your BMI Analysis ---\n\
             Input Weight: {:.2} kg\n\
             Input Height: {:.2} m\n\
             Calculated BMI: {:.2}\n\
             BMI Category:   {}\n{RULE}",
            self.weight_kg, self.height_m, self.bmi, self.category
        )
    }
}

/// Parse a strictly positive number
pub fn parse_positive(input: &str) -> Result<f64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err("Error: The value must be greater than zero. Please try again."),
        Err(_) => Err("Error: Invalid input. Please enter a numerical value (e.g., 70.5)."),
    }
}

/// Ask until a positive number is given
///
/// Returns `None` when input ends before a valid value arrives.
pub fn prompt_positive<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AssistResult<Option<f64>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nInput cancelled. Exiting.")?;
            return Ok(None);
        }

        match parse_positive(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

/// Interactive calculator; flags skip their prompt
pub fn run_interactive<R, W>(
    input: &mut R,
    output: &mut W,
    weight: Option<f64>,
    height: Option<f64>,
) -> AssistResult<Option<BmiReport>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{RULE}")?;
    writeln!(output, "--- Body Mass Index (BMI) Calculator ---")?;
    writeln!(output, "  Input required: Weight (kg), Height (m)")?;
    writeln!(output, "{RULE}")?;

    let weight = match weight {
        Some(w) => w,
        None => match prompt_positive(input, output, "Enter your weight in kilograms (kg): ")? {
            Some(w) => w,
            None => return Ok(None),
        },
    };
    let height = match height {
        Some(h) => h,
        None => match prompt_positive(input, output, "Enter your height in meters (m): ")? {
            Some(h) => h,
            None => return Ok(None),
        },
    };

    let report = BmiReport::new(weight, height)?;
    writeln!(output, "{}", report.render())?;
    Ok(Some(report))
}
