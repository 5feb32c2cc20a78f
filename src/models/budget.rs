//! Budget configuration
//!
//! Holds the monthly budget. Zero means no budget has been set.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::money::Money;
use crate::error::ValidationError;

/// Monthly budget settings persisted to config.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Monthly budget, stored in the file as a number of currency units
    #[serde(default, with = "currency_units")]
    monthly_budget: Money,
}

impl BudgetConfig {
    /// Create a config with the given monthly budget
    pub fn new(monthly_budget: Money) -> Result<Self, ValidationError> {
        let mut config = Self::default();
        config.set_monthly_budget(monthly_budget)?;
        Ok(config)
    }

    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    /// Update the monthly budget; negative budgets are rejected
    pub fn set_monthly_budget(&mut self, amount: Money) -> Result<(), ValidationError> {
        if amount.is_negative() {
            return Err(ValidationError::amount(
                amount.to_decimal_string(),
                "budget cannot be negative",
            ));
        }
        self.monthly_budget = amount;
        Ok(())
    }

    /// Check whether a budget has been set
    pub fn is_set(&self) -> bool {
        self.monthly_budget.is_positive()
    }
}

mod currency_units {
    use super::*;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(amount.as_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if value < 0.0 {
            return Err(serde::de::Error::custom("monthly_budget cannot be negative"));
        }
        Money::from_f64(value)
            .filter(|amount| *amount <= Money::MAX)
            .ok_or_else(|| serde::de::Error::custom("monthly_budget is out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let config = BudgetConfig::default();
        assert_eq!(config.monthly_budget(), Money::zero());
        assert!(!config.is_set());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(BudgetConfig::new(Money::from_cents(-1)).is_err());

        let mut config = BudgetConfig::new(Money::from_cents(5000)).unwrap();
        assert!(config.set_monthly_budget(Money::from_cents(-100)).is_err());
        assert_eq!(config.monthly_budget().cents(), 5000);
    }

    #[test]
    fn test_serialization() {
        let config = BudgetConfig::new(Money::from_cents(12050)).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"monthly_budget":120.5}"#);

        let deserialized: BudgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_lenient_and_strict() {
        let config: BudgetConfig = serde_json::from_str(r#"{"monthly_budget": 300}"#).unwrap();
        assert_eq!(config.monthly_budget().cents(), 30000);

        let config: BudgetConfig = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config, BudgetConfig::default());

        assert!(serde_json::from_str::<BudgetConfig>(r#"{"monthly_budget": -5}"#).is_err());
        assert!(serde_json::from_str::<BudgetConfig>(r#"{"monthly_budget": "100"}"#).is_err());
        assert!(serde_json::from_str::<BudgetConfig>(r#"{"monthly_budget": 1e13}"#).is_err());
    }
}
