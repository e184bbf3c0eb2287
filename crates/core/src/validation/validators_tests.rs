//! Tests for input validators.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::validation::*;
    use rust_decimal_macros::dec;

    // ==================== validate_email ====================

    #[test]
    fn test_validate_email_accepts_minimal_shape() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("jane.doe+invest@urbanroof.co.ke"));
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@b.com "));
    }

    // ==================== validate_password ====================

    #[test]
    fn test_validate_password_too_short() {
        assert_eq!(
            validate_password("12345"),
            ValidationResult {
                valid: false,
                message: Some("Password must be at least 6 characters long".to_string()),
            }
        );
        assert!(!validate_password("").valid);
    }

    #[test]
    fn test_validate_password_minimum_length() {
        assert_eq!(validate_password("123456"), ValidationResult::ok());
        assert!(validate_password("correct horse battery staple").valid);
    }

    #[test]
    fn test_validate_password_counts_characters() {
        // Six characters, more than six bytes
        assert!(validate_password("ñññààà").valid);
    }

    // ==================== validate_amount ====================

    #[test]
    fn test_validate_amount_must_be_positive() {
        let result = validate_amount(dec!(0), None);
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("Amount must be greater than 0"));
        assert!(!validate_amount(dec!(-10), Some(dec!(100))).valid);
    }

    #[test]
    fn test_validate_amount_respects_max() {
        let result = validate_amount(dec!(100), Some(dec!(50)));
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("Amount cannot exceed 50"));

        assert_eq!(validate_amount(dec!(50), Some(dec!(100))), ValidationResult::ok());
        assert!(validate_amount(dec!(100), Some(dec!(100))).valid);
    }

    #[test]
    fn test_validate_amount_without_max() {
        assert_eq!(validate_amount(dec!(50), None), ValidationResult::ok());
        assert!(validate_amount(dec!(1000000000), None).valid);
    }

    #[test]
    fn test_validate_amount_max_message_drops_trailing_zeros() {
        let result = validate_amount(dec!(2000), Some(dec!(1500.50)));
        assert_eq!(result.message.as_deref(), Some("Amount cannot exceed 1500.5"));
    }

    // ==================== parse_amount_input ====================

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("1500"), Some(dec!(1500)));
        assert_eq!(parse_amount_input("  250.75 "), Some(dec!(250.75)));
        assert_eq!(parse_amount_input("1e3"), Some(dec!(1000)));
        assert_eq!(parse_amount_input(""), None);
        assert_eq!(parse_amount_input("abc"), None);
    }

    // ==================== ValidationResult ====================

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());

        let err = validate_password("abc").into_result().unwrap_err();
        match err {
            Error::Validation(ValidationError::InvalidInput(msg)) => {
                assert_eq!(msg, "Password must be at least 6 characters long")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_result_serialization() {
        assert_eq!(
            serde_json::to_string(&ValidationResult::ok()).unwrap(),
            r#"{"valid":true}"#
        );
        assert_eq!(
            serde_json::to_string(&ValidationResult::invalid("nope")).unwrap(),
            r#"{"valid":false,"message":"nope"}"#
        );
    }

    // ==================== forms ====================

    #[test]
    fn test_validate_sign_up_empty_form() {
        let errors = validate_sign_up(&SignUpForm::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("confirmPassword"), Some("Please confirm your password"));
    }

    #[test]
    fn test_validate_sign_up_field_rules() {
        let form = SignUpForm {
            name: "Amina".to_string(),
            email: "amina@example".to_string(),
            password: "abc".to_string(),
            confirm_password: "abcd".to_string(),
        };
        let errors = validate_sign_up(&form);
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters long")
        );
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_validate_sign_up_valid_form() {
        let form = SignUpForm {
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        assert!(validate_sign_up(&form).is_empty());
    }

    #[test]
    fn test_validate_sign_in_only_requires_password_presence() {
        let form = SignInForm {
            email: "amina@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(validate_sign_in(&form).is_empty());

        let errors = validate_sign_in(&SignInForm::default());
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }
}
