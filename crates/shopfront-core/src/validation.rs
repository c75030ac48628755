//! # Validation Module
//!
//! Input validation for the admin product form and cart quantities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  └── THIS MODULE: form rules, all field errors at once                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API                                                   │
//! │  └── Whatever the demo server enforces (not much)                      │
//! │                                                                         │
//! │  A form that fails here NEVER reaches the network.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_title, validate_quantity};
//!
//! validate_title("Red Shirt").unwrap();
//! validate_quantity(3).unwrap();
//! ```

use url::Url;

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductForm;

/// Image extensions the admin form accepts, matched case-insensitively.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required { field: "title" });
    }
    Ok(())
}

/// Validates a product price in cents.
///
/// ## Rules
/// - Must be strictly positive; zero-priced products are rejected
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive { field: "price" });
    }
    Ok(())
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be empty
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required { field: "category" });
    }
    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required { field: "description" });
    }
    Ok(())
}

/// Validates an image URL.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as an absolute http(s) URL
/// - Must end in a recognized image extension (jpg/jpeg/png/gif/webp),
///   case-insensitive
pub fn validate_image_url(image: &str) -> ValidationResult<()> {
    let image = image.trim();

    if image.is_empty() {
        return Err(ValidationError::Required { field: "image" });
    }

    let parsed = Url::parse(image).map_err(|_| ValidationError::InvalidFormat {
        field: "image",
        reason: "must be a valid URL",
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidFormat {
            field: "image",
            reason: "must use http or https",
        });
    }

    let lowered = image.to_lowercase();
    if !IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        return Err(ValidationError::InvalidFormat {
            field: "image",
            reason: "must end in jpg, jpeg, png, gif, or webp",
        });
    }

    Ok(())
}

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be >= 1; zero would violate the cart line invariant
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the full admin product form.
///
/// Returns ALL field errors at once so the frontend can surface one
/// message per invalid field, not just the first failure. An `Err` result
/// means the submission is blocked before any network call.
pub fn validate_product_form(form: &ProductForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_title(&form.title) {
        errors.push(e);
    }
    if let Err(e) = validate_price_cents(form.price.cents()) {
        errors.push(e);
    }
    if let Err(e) = validate_category(&form.category) {
        errors.push(e);
    }
    if let Err(e) = validate_image_url(&form.image) {
        errors.push(e);
    }
    if let Err(e) = validate_description(&form.description) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn valid_form() -> ProductForm {
        ProductForm {
            title: "Red Shirt".to_string(),
            price: Price::from_cents(999),
            description: "A red shirt".to_string(),
            image: "https://example.com/shirt.jpg".to_string(),
            category: "men's clothing".to_string(),
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Red Shirt").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(999).is_ok());
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("https://example.com/a.jpg").is_ok());
        assert!(validate_image_url("http://example.com/a.PNG").is_ok());
        assert!(validate_image_url("https://example.com/a.webp").is_ok());

        assert!(validate_image_url("").is_err());
        assert!(validate_image_url("not a url").is_err());
        assert!(validate_image_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_image_url("https://example.com/a.bmp").is_err());
        assert!(validate_image_url("https://example.com/a").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_product_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_zero_price_rejected_with_price_error() {
        let form = ProductForm {
            price: Price::zero(),
            ..valid_form()
        };

        let errors = validate_product_form(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "price");
    }

    #[test]
    fn test_all_field_errors_reported_at_once() {
        let form = ProductForm {
            title: "".to_string(),
            price: Price::zero(),
            description: "".to_string(),
            image: "bogus".to_string(),
            category: "".to_string(),
        };

        let errors = validate_product_form(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec!["title", "price", "category", "image", "description"]
        );
    }
}
