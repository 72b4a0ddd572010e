//! JSON Schema (Draft 7) checks for stored configuration blobs.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

static CONFIG_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(include_str!("../../schemas/payment-page-config.json"))
        .expect("Invalid embedded schema");
    jsonschema::draft7::new(&schema).expect("Embedded schema does not compile")
});

fn collect_errors(validator: &Validator, data: &Value) -> Result<(), Vec<String>> {
    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate `data` against a JSON schema.
///
/// Returns every violation as a message.
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;
    collect_errors(&validator, data)
}

pub fn is_valid(schema: &Value, data: &Value) -> bool {
    jsonschema::draft7::is_valid(schema, data)
}

/// Validate a stored blob against the configuration schema.
///
/// The schema is compiled once, on first use.
pub fn validate_configuration(data: &Value) -> Result<(), Vec<String>> {
    collect_errors(&CONFIG_VALIDATOR, data)
}

pub fn is_valid_configuration(data: &Value) -> bool {
    CONFIG_VALIDATOR.is_valid(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_configuration() {
        let blob = json!({
            "recipient": "vitalik.eth",
            "slug": "vitalik",
            "buttonStyle": { "backgroundColor": "#000000" },
            "thankYouPage": { "showConfetti": true },
            "paymentOptions": { "currency": "CHF", "webhooks": ["", "https://a.b/c"] }
        });
        assert!(is_valid_configuration(&blob));
    }

    #[test]
    fn test_legacy_configuration() {
        let blob = json!({
            "ensNameOrAddress": "0xabc",
            "slug": "0xabc",
            "yodl": { "tokens": "USDC" }
        });
        assert!(is_valid_configuration(&blob));
    }

    #[test]
    fn test_missing_recipient() {
        let blob = json!({ "slug": "x" });
        assert!(validate_configuration(&blob).is_err());
    }

    #[test]
    fn test_wrong_types() {
        let blob = json!({
            "recipient": "a",
            "thankYouPage": { "showConfetti": "yes" }
        });
        let errors = validate_configuration(&blob).unwrap_err();
        assert!(!errors.is_empty());

        let blob = json!({
            "recipient": "a",
            "paymentOptions": { "currency": "JPY" }
        });
        assert!(!is_valid_configuration(&blob));
    }

    #[test]
    fn test_too_many_webhooks() {
        let blob = json!({
            "recipient": "a",
            "paymentOptions": { "webhooks": ["1", "2", "3", "4", "5", "6"] }
        });
        assert!(!is_valid_configuration(&blob));
    }

    #[test]
    fn test_ad_hoc_schema() {
        let schema = json!({ "type": "object", "required": ["recipient"] });
        assert!(is_valid(&schema, &json!({ "recipient": "a" })));
        assert_eq!(validate(&schema, &json!({})).unwrap_err().len(), 1);
        assert!(validate(&json!({ "type": 12 }), &json!({})).is_err());
    }

    #[test]
    fn test_not_an_object() {
        assert!(!is_valid_configuration(&json!([1, 2, 3])));
        assert!(!is_valid_configuration(&json!("text")));
    }
}
