#[cfg(test)]
use chrono::Utc;

#[cfg(test)]
use crate::features::brands::models::Brand;
#[cfg(test)]
use crate::features::categories::models::Category;

#[cfg(test)]
pub fn test_category(id: i64, parent_id: Option<i64>, name: &str, slug: &str) -> Category {
    let now = Utc::now();
    Category {
        id,
        parent_id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        hidden_in_brand_view: false,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
pub fn test_hidden_category(id: i64, parent_id: Option<i64>, name: &str, slug: &str) -> Category {
    Category {
        hidden_in_brand_view: true,
        ..test_category(id, parent_id, name, slug)
    }
}

#[cfg(test)]
pub fn test_brand(slug: &str, name: &str) -> Brand {
    Brand {
        slug: slug.to_string(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}
