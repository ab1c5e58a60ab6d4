//! Filter projections handed off through the provider registry.
//!
//! A filter is a reduced, flattened copy of an entity's fields, built from
//! the selection form and stored transiently for the downstream detail page
//! to consume. Form values arrive as text, so every field except the parsed
//! flags and coordinates stays a `String`.

use serde::{Deserialize, Serialize};

/// Projection of a selected shop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShopFilter {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub is_verified: bool,
    pub image_url: String,
    pub is_open: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

impl ShopFilter {
    /// Default entry seeded into the registry before the first selection
    /// overwrite for an id.
    #[must_use]
    pub fn default_for(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            ..Self::default()
        }
    }
}

/// Projection of a selected user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserFilter {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: String,
    pub is_verified: bool,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

impl UserFilter {
    /// Default entry seeded into the registry before the first selection
    /// overwrite for an id.
    #[must_use]
    pub fn default_for(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_sets_only_the_id() {
        let filter = ShopFilter::default_for("7");
        assert_eq!(filter.id, "7");
        assert_eq!(filter.name, "");
        assert!(!filter.is_verified);
        assert!(!filter.is_open);
        assert!(filter.latitude.abs() < f64::EPSILON);

        let user = UserFilter::default_for("21");
        assert_eq!(user.id, "21");
        assert_eq!(user.role, "");
    }
}
