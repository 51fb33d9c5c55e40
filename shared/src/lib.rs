use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spending record as persisted by the record store.
///
/// Amounts are held in integer cents so repeated loads and saves never drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Generated UUID (v4)
    pub id: String,
    /// Amount in minor currency units, always positive
    pub amount: i64,
    /// Trimmed description, 1-100 characters
    pub description: String,
    pub category: Category,
    /// Calendar date of the spending (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,
}

/// The user-supplied part of a transaction, before the store assigns
/// an id and a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub amount: i64,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl Transaction {
    /// Build a record from validated input plus the store-assigned fields
    pub fn from_input(input: TransactionInput, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: input.amount,
            description: input.description,
            category: input.category,
            date: input.date,
            created_at,
        }
    }
}

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// All categories in form display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// Wire value, as stored in JSON and used for `<option value>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Parse a wire value; surrounding whitespace and case are ignored
    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields of the add-transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Amount,
    Description,
    Category,
    Date,
}

impl FormField {
    /// DOM id of the matching input element
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Description => "description",
            FormField::Category => "category",
            FormField::Date => "date",
        }
    }
}

/// Specific validation errors for the transaction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionValidationError {
    EmptyAmount,
    InvalidAmountFormat(String),
    AmountNotPositive,
    AmountTooLarge,
    EmptyDescription,
    DescriptionTooLong(usize),
    UnknownCategory(String),
    EmptyDate,
    InvalidDate(String),
}

impl TransactionValidationError {
    /// The form field this error belongs to
    pub fn field(&self) -> FormField {
        match self {
            TransactionValidationError::EmptyAmount
            | TransactionValidationError::InvalidAmountFormat(_)
            | TransactionValidationError::AmountNotPositive
            | TransactionValidationError::AmountTooLarge => FormField::Amount,
            TransactionValidationError::EmptyDescription
            | TransactionValidationError::DescriptionTooLong(_) => FormField::Description,
            TransactionValidationError::UnknownCategory(_) => FormField::Category,
            TransactionValidationError::EmptyDate | TransactionValidationError::InvalidDate(_) => {
                FormField::Date
            }
        }
    }
}

/// Outcome of validating the raw transaction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFormValidation {
    pub is_valid: bool,
    pub errors: Vec<TransactionValidationError>,
    /// Normalized input, present only when `is_valid`
    pub cleaned_input: Option<TransactionInput>,
}

/// Raw, unvalidated form values exactly as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionFormState {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

/// A transaction prepared for the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: String,
    pub formatted_date: String,
    pub description: String,
    pub category_label: String,
    pub formatted_amount: String,
    /// Accessible label of the row's delete button
    pub delete_label: String,
}

/// Everything the transaction table needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTable {
    pub rows: Vec<FormattedTransaction>,
    /// e.g. "3 transactions"
    pub count_caption: String,
}

impl TransactionTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A visual theme for rendered cards.
///
/// Themes are static configuration: the registry hands out `&'static Theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    /// Display name (Chinese)
    pub name: &'static str,
    pub emoji: &'static str,
    pub bg_color: &'static str,
    pub bg_gradient: Option<&'static str>,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub accent_color: &'static str,
    pub border_color: &'static str,
    pub font_family: &'static str,
    /// CSS text-shadow applied to headings and body text
    pub glow_effect: Option<&'static str>,
    pub code_background: &'static str,
}

impl Theme {
    /// CSS `background` value: the gradient when the theme has one
    pub fn background(&self) -> &'static str {
        self.bg_gradient.unwrap_or(self.bg_color)
    }

    /// All color tokens in a fixed order, useful when comparing themes
    pub fn color_tokens(&self) -> [&'static str; 5] {
        [
            self.bg_color,
            self.text_primary,
            self.text_secondary,
            self.accent_color,
            self.border_color,
        ]
    }
}

/// Configuration for the transaction tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendSenseConfig {
    /// Key under which the full record set is persisted
    pub storage_key: String,
    pub max_description_length: usize,
    pub currency_symbol: String,
}

impl Default for SpendSenseConfig {
    fn default() -> Self {
        Self {
            storage_key: "spendsense-transactions".to_string(),
            max_description_length: 100,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Configuration for the card generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoCardConfig {
    pub default_theme_id: String,
    /// Footer brand line
    pub brand_text: String,
    /// Device pixel ratio used for PNG export
    pub pixel_ratio: f64,
    pub filename_prefix: String,
}

impl Default for MoCardConfig {
    fn default() -> Self {
        Self {
            default_theme_id: "ink-smoke".to_string(),
            brand_text: "墨卡 · 由 AI 驱动".to_string(),
            pixel_ratio: 2.0,
            filename_prefix: "mocard".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub spendsense: SpendSenseConfig,
    pub mocard: MoCardConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_json_uses_camel_case_and_lowercase_category() {
        let transaction = Transaction {
            id: "test-id".to_string(),
            amount: 4550,
            description: "Test transaction".to_string(),
            category: Category::Entertainment,
            date: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
            created_at: "2025-01-29T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&transaction).unwrap();
        assert_eq!(json["createdAt"], "2025-01-29T12:00:00Z");
        assert_eq!(json["category"], "entertainment");
        assert_eq!(json["date"], "2025-01-29");
        assert_eq!(json["amount"], 4550);
    }

    #[test]
    fn test_transaction_parses_prototype_records() {
        let raw = r#"{"id":"existing-1","amount":5000,"description":"Pre-existing",
            "category":"bills","date":"2025-01-25","createdAt":"2025-01-25T10:00:00Z"}"#;
        let transaction: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(transaction.id, "existing-1");
        assert_eq!(transaction.category, Category::Bills);
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
    }

    #[test]
    fn test_category_parse_and_labels() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse(" Bills "), Some(Category::Bills));
        assert_eq!(Category::parse("groceries"), None);
        assert_eq!(Category::Entertainment.label(), "Entertainment");
        assert_eq!(Category::default(), Category::Food);
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(TransactionValidationError::AmountNotPositive.field(), FormField::Amount);
        assert_eq!(TransactionValidationError::DescriptionTooLong(101).field(), FormField::Description);
        assert_eq!(TransactionValidationError::EmptyDate.field(), FormField::Date);
    }

    #[test]
    fn test_config_defaults_fill_missing_sections() {
        let config: AppConfig = serde_json::from_str(r#"{"mocard":{"pixel_ratio":3.0}}"#).unwrap();
        assert_eq!(config.spendsense.storage_key, "spendsense-transactions");
        assert_eq!(config.mocard.pixel_ratio, 3.0);
        assert_eq!(config.mocard.default_theme_id, "ink-smoke");
    }
}
