use serde::Serialize;
use utoipa::ToSchema;

/// One entry of an ordered breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Crumb {
    pub label: String,
    pub url: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Insert the brand crumb immediately before the final (most specific
/// category) crumb, regardless of trail depth. An empty trail gets the
/// brand crumb alone.
pub fn splice(mut trail: Vec<Crumb>, brand_crumb: Crumb) -> Vec<Crumb> {
    match trail.pop() {
        Some(last) => {
            trail.push(brand_crumb);
            trail.push(last);
        }
        None => trail.push(brand_crumb),
    }

    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(label: &str) -> Crumb {
        Crumb::new(label, format!("/{}/", label.to_lowercase()))
    }

    #[test]
    fn test_splice_lands_before_last_crumb() {
        let trail = vec![crumb("Home"), crumb("Products"), crumb("Shoes")];
        let spliced = splice(trail, crumb("Nike"));

        let labels: Vec<&str> = spliced.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Products", "Nike", "Shoes"]);
    }

    #[test]
    fn test_splice_empty_trail_appends_alone() {
        let spliced = splice(vec![], crumb("X"));
        let labels: Vec<&str> = spliced.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["X"]);
    }

    #[test]
    fn test_splice_single_crumb_trail() {
        let spliced = splice(vec![crumb("Shoes")], crumb("Nike"));
        let labels: Vec<&str> = spliced.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Nike", "Shoes"]);
    }
}
