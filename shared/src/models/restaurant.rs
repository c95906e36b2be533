//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Price tier enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Price {
    Cheap,
    Regular,
    Expensive,
}

/// Named place a restaurant belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Named cuisine category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
}

/// Restaurant entity, read-only projection for detail pages.
///
/// `slug` is the unique human-readable key used in routes; it resolves
/// to at most one restaurant. Field names match the upstream schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub images: Vec<String>,
    pub description: String,
    pub open_time: String,
    pub close_time: String,
    pub slug: String,
    pub price: Price,
    pub location: Location,
    pub cuisine: Cuisine,
    pub main_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_schema() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{
                "id": 12,
                "name": "Vivaan",
                "images": ["a.jpg", "b.jpg"],
                "description": "Fine Indian dining",
                "open_time": "14:30:00.000Z",
                "close_time": "22:00:00.000Z",
                "slug": "vivaan-fine-indian-cuisine-ottawa",
                "price": "EXPENSIVE",
                "location": {"id": 2, "name": "ottawa"},
                "cuisine": {"id": 1, "name": "indian"},
                "main_image": "a.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(restaurant.slug, "vivaan-fine-indian-cuisine-ottawa");
        assert_eq!(restaurant.price, Price::Expensive);
        assert_eq!(restaurant.location.name, "ottawa");
        assert_eq!(restaurant.images.len(), 2);
    }
}
