//! Transaction form validation.
//!
//! Turns the raw strings typed into the add-transaction form into a
//! [`TransactionInput`], or reports every problem at once so the form can show
//! them inline next to each field.

use chrono::NaiveDate;
use shared::{
    Category, FormField, SpendSenseConfig, TransactionFormState, TransactionFormValidation,
    TransactionInput, TransactionValidationError,
};
use std::collections::BTreeMap;

/// Largest accepted amount in cents (2^53). Above this an `f64` no longer
/// holds every whole cent.
pub const MAX_AMOUNT_CENTS: i64 = 1 << 53;

/// Validation and normalization rules for the add-transaction form
#[derive(Debug, Clone, Default)]
pub struct TransactionFormService {
    config: SpendSenseConfig,
}

impl TransactionFormService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SpendSenseConfig) -> Self {
        Self { config }
    }

    /// A blank form: empty amount and description, `food`, dated `today`
    pub fn new_form_state(today: NaiveDate) -> TransactionFormState {
        TransactionFormState {
            amount: String::new(),
            description: String::new(),
            category: Category::default().as_str().to_string(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Validate every field; all failures are collected, not just the first
    pub fn validate(&self, form: &TransactionFormState) -> TransactionFormValidation {
        let mut errors = Vec::new();

        let amount = match self.parse_amount_cents(&form.amount) {
            Ok(cents) => Some(cents),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let description = form.description.trim();
        if description.is_empty() {
            errors.push(TransactionValidationError::EmptyDescription);
        } else {
            let length = description.chars().count();
            if length > self.config.max_description_length {
                errors.push(TransactionValidationError::DescriptionTooLong(length));
            }
        }

        let category = if form.category.trim().is_empty() {
            Some(Category::default())
        } else {
            let parsed = Category::parse(&form.category);
            if parsed.is_none() {
                errors.push(TransactionValidationError::UnknownCategory(form.category.clone()));
            }
            parsed
        };

        let date_input = form.date.trim();
        let date = if date_input.is_empty() {
            errors.push(TransactionValidationError::EmptyDate);
            None
        } else {
            match NaiveDate::parse_from_str(date_input, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(TransactionValidationError::InvalidDate(date_input.to_string()));
                    None
                }
            }
        };

        let cleaned_input = match (errors.is_empty(), amount, category, date) {
            (true, Some(amount), Some(category), Some(date)) => Some(TransactionInput {
                amount,
                description: description.to_string(),
                category,
                date,
            }),
            _ => None,
        };

        TransactionFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_input,
        }
    }

    /// Parse a user-entered amount into positive integer cents
    pub fn parse_amount_cents(&self, amount_input: &str) -> Result<i64, TransactionValidationError> {
        let cleaned = amount_input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .replace(',', "")
            .replace(' ', "");

        if cleaned.is_empty() {
            return Err(TransactionValidationError::EmptyAmount);
        }

        let value = cleaned
            .parse::<f64>()
            .map_err(|e| TransactionValidationError::InvalidAmountFormat(e.to_string()))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(TransactionValidationError::AmountNotPositive);
        }

        let cents = (value * 100.0).round();
        if cents < 1.0 {
            return Err(TransactionValidationError::AmountNotPositive);
        }
        if cents > MAX_AMOUNT_CENTS as f64 {
            return Err(TransactionValidationError::AmountTooLarge);
        }
        Ok(cents as i64)
    }

    /// User-facing message for a validation error
    pub fn error_message(&self, error: &TransactionValidationError) -> String {
        match error {
            TransactionValidationError::EmptyAmount
            | TransactionValidationError::InvalidAmountFormat(_)
            | TransactionValidationError::AmountNotPositive
            | TransactionValidationError::AmountTooLarge => {
                "Amount must be a positive number".to_string()
            }
            TransactionValidationError::EmptyDescription => "Description is required".to_string(),
            TransactionValidationError::DescriptionTooLong(_) => format!(
                "Description must be {} characters or less",
                self.config.max_description_length
            ),
            TransactionValidationError::UnknownCategory(_) => {
                "Please select a valid category".to_string()
            }
            TransactionValidationError::EmptyDate => "Date is required".to_string(),
            TransactionValidationError::InvalidDate(_) => "Date must be a valid date".to_string(),
        }
    }

    /// One message per failing field, keyed by field
    pub fn field_errors(&self, validation: &TransactionFormValidation) -> BTreeMap<FormField, String> {
        let mut messages = BTreeMap::new();
        for error in &validation.errors {
            messages
                .entry(error.field())
                .or_insert_with(|| self.error_message(error));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, description: &str, category: &str, date: &str) -> TransactionFormState {
        TransactionFormState {
            amount: amount.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let service = TransactionFormService::new();
        let validation = service.validate(&form("45.50", "  Grocery shopping  ", "food", "2025-01-29"));

        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        let input = validation.cleaned_input.unwrap();
        assert_eq!(input.amount, 4550);
        assert_eq!(input.description, "Grocery shopping");
        assert_eq!(input.category, Category::Food);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
    }

    #[test]
    fn test_amount_is_rounded_to_cents() {
        let service = TransactionFormService::new();
        assert_eq!(service.parse_amount_cents("99.99"), Ok(9999));
        assert_eq!(service.parse_amount_cents("0.019"), Ok(2));
        assert_eq!(service.parse_amount_cents("$1,250.5"), Ok(125050));
        assert_eq!(service.parse_amount_cents("25"), Ok(2500));
    }

    #[test]
    fn test_non_positive_and_missing_amounts_are_rejected() {
        let service = TransactionFormService::new();
        assert_eq!(service.parse_amount_cents(""), Err(TransactionValidationError::EmptyAmount));
        assert_eq!(service.parse_amount_cents("   "), Err(TransactionValidationError::EmptyAmount));
        assert_eq!(service.parse_amount_cents("0"), Err(TransactionValidationError::AmountNotPositive));
        assert_eq!(service.parse_amount_cents("-5"), Err(TransactionValidationError::AmountNotPositive));
        assert_eq!(service.parse_amount_cents("0.001"), Err(TransactionValidationError::AmountNotPositive));
        assert_eq!(service.parse_amount_cents("inf"), Err(TransactionValidationError::AmountNotPositive));
        assert!(matches!(
            service.parse_amount_cents("abc"),
            Err(TransactionValidationError::InvalidAmountFormat(_))
        ));
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let service = TransactionFormService::new();
        assert_eq!(
            service.parse_amount_cents("90000000000000000"),
            Err(TransactionValidationError::AmountTooLarge)
        );
        assert_eq!(
            service.parse_amount_cents("1e300"),
            Err(TransactionValidationError::AmountTooLarge)
        );
        assert_eq!(service.parse_amount_cents("90000000000000"), Ok(9_000_000_000_000_000));
        assert_eq!(
            service.error_message(&TransactionValidationError::AmountTooLarge),
            "Amount must be a positive number"
        );
    }

    #[test]
    fn test_empty_form_reports_amount_and_description_together() {
        let service = TransactionFormService::new();
        let validation = service.validate(&form("", "", "food", "2025-01-29"));

        assert!(!validation.is_valid);
        assert!(validation.cleaned_input.is_none());

        let messages = service.field_errors(&validation);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[&FormField::Amount], "Amount must be a positive number");
        assert_eq!(messages[&FormField::Description], "Description is required");
    }

    #[test]
    fn test_whitespace_description_is_required() {
        let service = TransactionFormService::new();
        let validation = service.validate(&form("10", "   ", "food", "2025-01-29"));
        assert_eq!(validation.errors, vec![TransactionValidationError::EmptyDescription]);
    }

    #[test]
    fn test_description_length_limit() {
        let service = TransactionFormService::new();

        let exactly_100 = "a".repeat(100);
        assert!(service.validate(&form("10", &exactly_100, "food", "2025-01-29")).is_valid);

        let too_long = "长".repeat(101);
        let validation = service.validate(&form("10", &too_long, "food", "2025-01-29"));
        assert_eq!(validation.errors, vec![TransactionValidationError::DescriptionTooLong(101)]);
        assert_eq!(
            service.field_errors(&validation)[&FormField::Description],
            "Description must be 100 characters or less"
        );
    }

    #[test]
    fn test_date_is_required_and_must_parse() {
        let service = TransactionFormService::new();

        let missing = service.validate(&form("10", "Lunch", "food", ""));
        assert_eq!(service.field_errors(&missing)[&FormField::Date], "Date is required");

        let invalid = service.validate(&form("10", "Lunch", "food", "2025-02-30"));
        assert_eq!(service.field_errors(&invalid)[&FormField::Date], "Date must be a valid date");
    }

    #[test]
    fn test_category_handling() {
        let service = TransactionFormService::new();

        let blank = service.validate(&form("10", "Lunch", "", "2025-01-29"));
        assert_eq!(blank.cleaned_input.unwrap().category, Category::Food);

        let unknown = service.validate(&form("10", "Lunch", "crypto", "2025-01-29"));
        assert_eq!(
            service.field_errors(&unknown)[&FormField::Category],
            "Please select a valid category"
        );
    }

    #[test]
    fn test_all_fields_can_fail_at_once() {
        let service = TransactionFormService::new();
        let validation = service.validate(&form("-1", "", "nope", ""));
        let fields: Vec<FormField> = service.field_errors(&validation).into_keys().collect();
        assert_eq!(
            fields,
            vec![FormField::Amount, FormField::Description, FormField::Category, FormField::Date]
        );
    }

    #[test]
    fn test_new_form_state_defaults() {
        let state = TransactionFormService::new_form_state(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(state.category, "food");
        assert_eq!(state.date, "2025-03-07");
        assert!(state.amount.is_empty() && state.description.is_empty());
    }
}
