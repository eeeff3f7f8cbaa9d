//! Category domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY_COLOR;
use crate::errors::ValidationError;
use crate::utils::is_hex_color;

/// A named color tag. `owner_user_id == None` marks a global (shared) category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub owner_user_id: Option<String>,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    pub fn is_global(&self) -> bool {
        self.owner_user_id.is_none()
    }
}

/// Raw form values for creating or recoloring a global category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl Default for NewCategory {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl NewCategory {
    /// Validates and trims the category fields.
    pub fn validate(&self) -> Result<NewCategory, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let color = self.color.trim();
        if !is_hex_color(color) {
            return Err(ValidationError::InvalidColor);
        }
        Ok(NewCategory {
            name: name.to_string(),
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_fields() {
        let category = NewCategory {
            name: "  Work ".to_string(),
            color: " #FF0000 ".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(category.name, "Work");
        assert_eq!(category.color, "#FF0000");
    }

    #[test]
    fn test_validate_requires_name_before_color() {
        let err = NewCategory {
            name: "   ".to_string(),
            color: "red".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let err = NewCategory {
            name: "Hobby".to_string(),
            color: "#12345".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidColor);
    }

    #[test]
    fn test_default_color() {
        assert_eq!(NewCategory::default().color, "#64748b");
    }
}
