//! User context
//!
//! The value an external collaborator supplies for each inbound message and
//! every flow resolver receives. Twilly treats its contents as opaque data.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Data describing the current user and session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// Identifier of the user, usually the sender's phone number
    pub user_id: String,
    /// Arbitrary user/session data
    pub data: HashMap<String, serde_json::Value>,
    /// When this context was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserContext {
    /// Create a new, empty context for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            data: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Builder-style variant of [`UserContext::set_data`]
    pub fn with_data<T: Serialize>(mut self, key: &str, value: T) -> Result<Self> {
        self.set_data(key, value)?;
        Ok(self)
    }

    /// Set data for the current context
    pub fn set_data<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)?;
        self.data.insert(key.to_string(), json_value);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Get data from the current context
    pub fn get_data<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        if let Some(value) = self.data.get(key) {
            let result: T = serde_json::from_value(value.clone())?;
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    /// Get string data (convenience method)
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_data::<String>(key).unwrap_or(None)
    }

    /// Get boolean data (convenience method)
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_data::<bool>(key).unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let context = UserContext::new("+15550100");
        assert_eq!(context.user_id, "+15550100");
        assert!(context.data.is_empty());
    }

    #[test]
    fn test_data_operations() {
        let mut context = UserContext::new("+15550100");

        context.set_data("name", "Dylan").unwrap();
        context.set_data("visits", 3).unwrap();
        context.set_data("opted_in", true).unwrap();

        assert_eq!(context.get_string("name"), Some("Dylan".to_string()));
        assert_eq!(context.get_data::<i64>("visits").unwrap(), Some(3));
        assert_eq!(context.get_bool("opted_in"), Some(true));
        assert_eq!(context.get_string("nonexistent"), None);

        // Wrong type reads as absent
        assert_eq!(context.get_bool("name"), None);
        assert!(context.get_data::<i64>("name").is_err());
    }

    #[test]
    fn test_with_data() {
        let context = UserContext::new("+15550100")
            .with_data("name", "Dylan")
            .unwrap();
        assert_eq!(context.get_string("name"), Some("Dylan".to_string()));
    }
}
