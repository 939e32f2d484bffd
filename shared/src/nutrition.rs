use serde::{Deserialize, Serialize};

/// Rendered for a macro the estimator could not determine.
pub const MISSING_MACRO: &str = "—";

/// `POST /meal-analysis`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAnalysisRequest {
    pub user_id: Option<i64>,
    pub description: String,
}

impl MealAnalysisRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            user_id: None,
            description: description.into(),
        }
    }
}

/// Estimated macros for a meal. Any field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroField {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl MacroField {
    pub const ALL: [MacroField; 4] = [
        MacroField::Calories,
        MacroField::Protein,
        MacroField::Carbs,
        MacroField::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MacroField::Calories => "Calories",
            MacroField::Protein => "Protein (g)",
            MacroField::Carbs => "Carbs (g)",
            MacroField::Fat => "Fat (g)",
        }
    }
}

impl MealSummary {
    pub fn value(&self, field: MacroField) -> Option<f64> {
        match field {
            MacroField::Calories => self.calories,
            MacroField::Protein => self.protein_g,
            MacroField::Carbs => self.carbs_g,
            MacroField::Fat => self.fat_g,
        }
    }

    /// Each field is formatted independently of the others.
    pub fn display(&self, field: MacroField) -> String {
        format_macro(self.value(field))
    }
}

/// Rounds to the nearest whole unit (half away from zero), or `—` when absent.
pub fn format_macro(value: Option<f64>) -> String {
    match value {
        // `+ 0.0` folds -0 into 0 so small negatives print as "0".
        Some(v) if v.is_finite() => format!("{:.0}", v.round() + 0.0),
        _ => MISSING_MACRO.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_present_values() {
        assert_eq!(format_macro(Some(412.4)), "412");
        assert_eq!(format_macro(Some(12.5)), "13");
        assert_eq!(format_macro(Some(0.0)), "0");
        assert_eq!(format_macro(Some(0.4)), "0");
        assert_eq!(format_macro(Some(-0.4)), "0");
        assert_eq!(format_macro(Some(-2.5)), "-3");
    }

    #[test]
    fn large_values_are_not_clamped() {
        assert_eq!(format_macro(Some(1e20)), "100000000000000000000");
        assert_eq!(format_macro(Some(9_007_199_254_740_993.0)), "9007199254740992");
    }

    #[test]
    fn absent_or_non_finite_is_placeholder() {
        assert_eq!(format_macro(None), "—");
        assert_eq!(format_macro(Some(f64::NAN)), "—");
    }

    #[test]
    fn fields_are_independent() {
        let summary: MealSummary =
            serde_json::from_str(r#"{"calories": 530.6, "protein_g": null, "fat_g": 17.2}"#)
                .unwrap();

        let shown: Vec<String> = MacroField::ALL.iter().map(|f| summary.display(*f)).collect();
        assert_eq!(shown, vec!["531", "—", "—", "17"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let summary: MealSummary = serde_json::from_str(
            r#"{"calories": 100, "protein_g": 5, "carbs_g": 20, "fat_g": 1, "raw": {"items": []}}"#,
        )
        .unwrap();
        assert_eq!(summary.display(MacroField::Carbs), "20");
    }

    #[test]
    fn request_shape() {
        let body = serde_json::to_value(MealAnalysisRequest::new("2 boiled eggs")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"user_id": null, "description": "2 boiled eggs"})
        );
    }
}
