use chrono::{NaiveDate, TimeDelta};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_NEARING_EXPIRY_DAYS: i64 = 7;

pub const MISSING_REQUIRED_FIELDS: &str = "Item name and expiry date are required";
pub const INVALID_EXPIRY_DATE: &str = "Invalid expiry date format. Use YYYY-MM-DD";
pub const EMPTY_NAME: &str = "Item name cannot be empty";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_expiry_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, EXPIRY_DATE_FORMAT)
        .map_err(|_| CoreError::ValidationError(INVALID_EXPIRY_DATE.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct CreateFoodItemInput {
    pub name: Option<String>,
    pub expiry: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Partial update as received from a caller.
///
/// The outer `Option` tells whether the field was supplied at all, the inner
/// one carries an explicit `null`.
#[derive(Debug, Clone, Default)]
pub struct UpdateFoodItemInput {
    pub item_id: Uuid,
    pub name: Option<Option<String>>,
    pub expiry: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub quantity: Option<Option<f64>>,
    pub unit: Option<Option<String>>,
}

/// Validated changes, ready to be applied to a stored item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodItemChanges {
    pub name: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub category: Option<Option<String>>,
    pub quantity: Option<Option<f64>>,
    pub unit: Option<Option<String>>,
}

impl TryFrom<UpdateFoodItemInput> for FoodItemChanges {
    type Error = CoreError;

    fn try_from(input: UpdateFoodItemInput) -> Result<Self, Self::Error> {
        let name = match input.name {
            None => None,
            Some(Some(name)) if !name.is_empty() => Some(name),
            Some(_) => return Err(CoreError::ValidationError(EMPTY_NAME.to_string())),
        };

        let expiry_date = match input.expiry {
            None => None,
            Some(Some(expiry)) => Some(parse_expiry_date(&expiry)?),
            Some(None) => {
                return Err(CoreError::ValidationError(INVALID_EXPIRY_DATE.to_string()));
            }
        };

        Ok(Self {
            name,
            expiry_date,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GetFoodItemInput {
    pub item_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteFoodItemInput {
    pub item_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetNearingExpiryInput {
    pub days: i64,
}

impl Default for GetNearingExpiryInput {
    fn default() -> Self {
        Self {
            days: DEFAULT_NEARING_EXPIRY_DAYS,
        }
    }
}

/// Inclusive `[from, to]` date range used by the nearing-expiry query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ExpiryWindow {
    /// Window from `today` through `today + days`. A negative `days` yields
    /// a window that matches nothing.
    pub fn starting_at(today: NaiveDate, days: i64) -> Self {
        let to = TimeDelta::try_days(days)
            .and_then(|delta| today.checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });

        Self { from: today, to }
    }

    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_expiry_date("2025-01-31").unwrap(), date(2025, 1, 31));
    }

    #[test]
    fn rejects_other_date_shapes() {
        for value in ["31/01/2025", "2025-02-30", "2025-01-31T10:00:00", "tomorrow", ""] {
            assert_eq!(
                parse_expiry_date(value),
                Err(CoreError::ValidationError(INVALID_EXPIRY_DATE.to_string())),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn absent_fields_produce_no_changes() {
        let changes = FoodItemChanges::try_from(UpdateFoodItemInput::default()).unwrap();
        assert_eq!(changes, FoodItemChanges::default());
    }

    #[test]
    fn null_optional_fields_clear_them() {
        let changes = FoodItemChanges::try_from(UpdateFoodItemInput {
            category: Some(None),
            quantity: Some(None),
            ..UpdateFoodItemInput::default()
        })
        .unwrap();

        assert_eq!(changes.category, Some(None));
        assert_eq!(changes.quantity, Some(None));
        assert_eq!(changes.unit, None);
    }

    #[test]
    fn update_reparses_expiry() {
        let changes = FoodItemChanges::try_from(UpdateFoodItemInput {
            expiry: Some(Some("2026-04-01".to_string())),
            ..UpdateFoodItemInput::default()
        })
        .unwrap();
        assert_eq!(changes.expiry_date, Some(date(2026, 4, 1)));

        let err = FoodItemChanges::try_from(UpdateFoodItemInput {
            expiry: Some(Some("04/01/2026".to_string())),
            ..UpdateFoodItemInput::default()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn update_rejects_null_or_empty_name() {
        for name in [None, Some(String::new())] {
            let err = FoodItemChanges::try_from(UpdateFoodItemInput {
                name: Some(name),
                ..UpdateFoodItemInput::default()
            })
            .unwrap_err();
            assert_eq!(err, CoreError::ValidationError(EMPTY_NAME.to_string()));
        }
    }

    #[test]
    fn expiry_window_spans_requested_days() {
        let window = ExpiryWindow::starting_at(date(2025, 12, 28), 7);
        assert_eq!(window.from, date(2025, 12, 28));
        assert_eq!(window.to, date(2026, 1, 4));
        assert!(!window.is_empty());
    }

    #[test]
    fn negative_days_give_an_empty_window() {
        assert!(ExpiryWindow::starting_at(date(2025, 12, 28), -1).is_empty());
    }

    #[test]
    fn huge_day_counts_saturate() {
        let window = ExpiryWindow::starting_at(date(2025, 12, 28), i64::MAX);
        assert_eq!(window.to, NaiveDate::MAX);
    }
}
