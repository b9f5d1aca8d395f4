//! Common validation utilities.

use chrono::NaiveDate;
use validator::ValidationError;

/// Largest page size the dashboard offers.
const MAX_PAGE_SIZE: u64 = 100;

/// Validates that a page size is positive and within the supported range.
pub fn validate_page_size(page_size: u64) -> Result<(), ValidationError> {
    if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        Ok(())
    } else {
        let mut err = ValidationError::new("page_size_range");
        err.message = Some("Page size must be between 1 and 100".into());
        Err(err)
    }
}

/// Validates that a date-range filter is not inverted.
///
/// Open-ended ranges (either bound missing) are always valid.
pub fn validate_date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => {
            let mut err = ValidationError::new("date_range_inverted");
            err.message = Some("From date must not be after to date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Validates a phone-number search term: digits only, 8 to 15 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if (8..=15).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone must be 8-15 digits".into());
        Err(err)
    }
}
