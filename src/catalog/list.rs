//! Client-side product list management
//!
//! Holds the fetched products and exposes the table's view operations:
//! case-insensitive search over title and description, category filtering,
//! column sorting with the toggle rule (same column flips direction, new
//! column resets to ascending), and in-memory create/update/delete. The
//! backing list only changes through CRUD; views are computed fresh each call.

use crate::catalog::models::{NewProduct, PLACEHOLDER_IMAGE, Product, Rating};
use crate::error::{Result, VitrinaError};
use std::cmp::Ordering;
use tracing::debug;

/// Sortable columns of the product table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by title (locale-naive, case-insensitive)
    Title,
    /// Sort by price
    Price,
    /// Sort by category
    Category,
    /// Sort by average rating
    Rating,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Category filter for the product view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// All categories
    #[default]
    All,
    /// Only products in the named category
    Only(String),
}

/// In-memory product list with view state
pub struct ProductList {
    products: Vec<Product>,
    search_term: String,
    category_filter: CategoryFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
}

impl ProductList {
    /// Create a list over fetched products, sorted by title ascending
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            sort_field: SortField::Title,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Number of products in the backing list, ignoring filters
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the backing list is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Set the search term matched against title and description
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Set the category filter
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// Current sort column and direction
    pub fn sort_order(&self) -> (SortField, SortDirection) {
        (self.sort_field, self.sort_direction)
    }

    /// Apply the column-header toggle rule
    ///
    /// Selecting the current column flips the direction; selecting a new
    /// column sorts it ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
        debug!(
            "Sort order now {:?} {:?}",
            self.sort_field, self.sort_direction
        );
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// The current view: filtered by search and category, then sorted
    pub fn view(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        let mut view: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                let matches_search = needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle);
                let matches_category = match &self.category_filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(category) => &p.category == category,
                };
                matches_search && matches_category
            })
            .collect();

        view.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                SortField::Price => a
                    .price
                    .partial_cmp(&b.price)
                    .unwrap_or(Ordering::Equal),
                SortField::Category => a.category.cmp(&b.category),
                SortField::Rating => a
                    .rating
                    .rate
                    .partial_cmp(&b.rating.rate)
                    .unwrap_or(Ordering::Equal),
            };
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        view
    }

    /// Add a product, assigning the next free id
    ///
    /// Returns the assigned id. An empty image URL falls back to the
    /// placeholder image.
    pub fn add(&mut self, new: NewProduct) -> u32 {
        let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let image = if new.image.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            new.image
        };
        self.products.push(Product {
            id,
            title: new.title,
            price: new.price,
            category: new.category,
            description: new.description,
            image,
            rating: Rating {
                rate: new.rating_rate,
                count: new.rating_count,
            },
        });
        debug!("Added product {id}");
        id
    }

    /// Replace the fields of an existing product, keeping its id
    pub fn update_product(&mut self, id: u32, updated: NewProduct) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(VitrinaError::ProductNotFound(id))?;

        product.title = updated.title;
        product.price = updated.price;
        product.category = updated.category;
        product.description = updated.description;
        product.image = updated.image;
        product.rating = Rating {
            rate: updated.rating_rate,
            count: updated.rating_count,
        };
        debug!("Updated product {id}");
        Ok(())
    }

    /// Remove a product by id
    pub fn remove(&mut self, id: u32) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(VitrinaError::ProductNotFound(id));
        }
        debug!("Removed product {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
            description: format!("{title} description"),
            image: String::new(),
            rating: Rating { rate, count: 10 },
        }
    }

    fn sample_list() -> ProductList {
        ProductList::new(vec![
            product(1, "Backpack", 109.95, "men's clothing", 3.9),
            product(2, "Gold Ring", 168.0, "jewelery", 4.6),
            product(3, "Monitor", 599.0, "electronics", 2.9),
            product(4, "T-Shirt", 22.3, "men's clothing", 4.1),
        ])
    }

    #[test]
    fn test_default_view_sorted_by_title() {
        let list = sample_list();
        let titles: Vec<&str> = list.view().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Backpack", "Gold Ring", "Monitor", "T-Shirt"]);
    }

    #[test]
    fn test_search_matches_title_and_description_case_insensitive() {
        let mut list = sample_list();
        list.set_search_term("MONITOR");
        assert_eq!(list.view().len(), 1);

        // "description" appears in every generated description
        list.set_search_term("description");
        assert_eq!(list.view().len(), 4);

        list.set_search_term("no such product");
        assert!(list.view().is_empty());
    }

    #[test]
    fn test_category_filter() {
        let mut list = sample_list();
        list.set_category_filter(CategoryFilter::Only("men's clothing".to_string()));
        let view = list.view();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| p.category == "men's clothing"));

        list.set_category_filter(CategoryFilter::All);
        assert_eq!(list.view().len(), 4);
    }

    #[test]
    fn test_toggle_sort_same_field_flips_direction() {
        let mut list = sample_list();
        list.toggle_sort(SortField::Price);
        assert_eq!(
            list.sort_order(),
            (SortField::Price, SortDirection::Ascending)
        );
        let prices: Vec<f64> = list.view().iter().map(|p| p.price).collect();
        assert_eq!(prices, [22.3, 109.95, 168.0, 599.0]);

        list.toggle_sort(SortField::Price);
        assert_eq!(
            list.sort_order(),
            (SortField::Price, SortDirection::Descending)
        );
        let prices: Vec<f64> = list.view().iter().map(|p| p.price).collect();
        assert_eq!(prices, [599.0, 168.0, 109.95, 22.3]);
    }

    #[test]
    fn test_toggle_sort_new_field_resets_to_ascending() {
        let mut list = sample_list();
        list.toggle_sort(SortField::Price);
        list.toggle_sort(SortField::Price);
        list.toggle_sort(SortField::Rating);
        assert_eq!(
            list.sort_order(),
            (SortField::Rating, SortDirection::Ascending)
        );
        let rates: Vec<f64> = list.view().iter().map(|p| p.rating.rate).collect();
        assert_eq!(rates, [2.9, 3.9, 4.1, 4.6]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let list = sample_list();
        assert_eq!(
            list.categories(),
            ["men's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn test_add_assigns_next_id_and_placeholder_image() {
        let mut list = sample_list();
        let id = list.add(NewProduct {
            title: "Keyboard".to_string(),
            price: 49.9,
            category: "electronics".to_string(),
            description: "Mechanical".to_string(),
            ..NewProduct::default()
        });
        assert_eq!(id, 5);

        let view = list.view();
        let added = view.iter().find(|p| p.id == 5).unwrap();
        assert_eq!(added.image, PLACEHOLDER_IMAGE);
        assert_eq!(added.rating.count, 0);
    }

    #[test]
    fn test_add_to_empty_list_starts_at_one() {
        let mut list = ProductList::new(Vec::new());
        let id = list.add(NewProduct {
            title: "First".to_string(),
            ..NewProduct::default()
        });
        assert_eq!(id, 1);
    }

    #[test]
    fn test_update_replaces_fields_keeps_id() {
        let mut list = sample_list();
        list.update_product(
            3,
            NewProduct {
                title: "Curved Monitor".to_string(),
                price: 649.0,
                category: "electronics".to_string(),
                description: "Ultrawide".to_string(),
                image: "https://example.test/monitor.jpg".to_string(),
                rating_rate: 4.4,
                rating_count: 55,
            },
        )
        .unwrap();

        let view = list.view();
        let updated = view.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(updated.title, "Curved Monitor");
        assert_eq!(updated.rating.count, 55);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut list = sample_list();
        let result = list.update_product(99, NewProduct::default());
        assert!(matches!(result, Err(VitrinaError::ProductNotFound(99))));
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let mut list = sample_list();
        list.remove(2).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.view().iter().all(|p| p.id != 2));

        assert!(matches!(
            list.remove(2),
            Err(VitrinaError::ProductNotFound(2))
        ));
    }

    #[test]
    fn test_view_is_non_destructive() {
        let mut list = sample_list();
        list.set_search_term("monitor");
        assert_eq!(list.view().len(), 1);
        list.set_search_term("");
        assert_eq!(list.view().len(), 4);
    }
}
