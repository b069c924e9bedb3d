//! Records produced by the structured pipelines.

use std::sync::OnceLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Structured job details extracted from a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobDetails {
    /// The job title
    pub job_title: String,
    /// List of required technical skills
    pub required_skills: Vec<String>,
    /// Years of experience required
    #[serde(deserialize_with = "deserialize_years")]
    #[schemars(with = "u32")]
    pub experience_required: u32,
    /// Tools and technologies mentioned
    pub tools: Vec<String>,
    /// Required soft skills
    pub soft_skills: Vec<String>,
}

/// Resume improvement suggestions based on job requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeSuggestions {
    /// Skills to add to resume
    pub missing_skills: Vec<String>,
    /// Specific improvements to resume
    pub improvement_points: Vec<String>,
    /// Overall fit assessment (0-100%)
    pub overall_fit_summary: String,
}

impl ResumeSuggestions {
    /// First percentage figure in the fit summary, if the model wrote one.
    ///
    /// The summary itself stays free text; this never rejects a record.
    pub fn fit_percentage(&self) -> Option<u8> {
        static PERCENT: OnceLock<Regex> = OnceLock::new();
        let re = PERCENT.get_or_init(|| {
            Regex::new(r"\b(\d{1,3})(?:\.\d+)?\s*%").expect("percent pattern is valid")
        });

        re.captures_iter(&self.overall_fit_summary)
            .filter_map(|c| c[1].parse::<u8>().ok())
            .find(|p| *p <= 100)
    }
}

/// Accepts a whole, non-negative number of years.
///
/// Integers, integral floats (`5.0`) and digit strings (`"5"`) pass.
/// Anything else, including `"5+"`, `-1` and `2.5`, is rejected.
fn deserialize_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Years {
        Whole(u64),
        Fractional(f64),
        Text(String),
    }

    match Years::deserialize(deserializer)? {
        Years::Whole(n) => u32::try_from(n)
            .map_err(|_| D::Error::custom(format!("experience_required out of range: {n}"))),
        Years::Fractional(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Ok(f as u32)
        }
        Years::Fractional(f) => Err(D::Error::custom(format!(
            "experience_required must be a non-negative whole number, got {f}"
        ))),
        Years::Text(s) => s.trim().parse::<u32>().map_err(|_| {
            D::Error::custom(format!(
                "experience_required must be a whole number of years, got {s:?}"
            ))
        }),
    }
}
