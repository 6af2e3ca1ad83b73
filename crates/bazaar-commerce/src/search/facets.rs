//! Category counts for the listing sidebar.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Number of products in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryFacet {
    pub category: CategoryId,
    pub count: usize,
}

/// Count `products` per category, in order of first appearance.
pub fn category_facets<'a, I>(products: I) -> Vec<CategoryFacet>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut facets: Vec<CategoryFacet> = Vec::new();
    for product in products {
        match facets.iter_mut().find(|f| f.category == product.category) {
            Some(facet) => facet.count += 1,
            None => facets.push(CategoryFacet {
                category: product.category.clone(),
                count: 1,
            }),
        }
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_category_facets() {
        let products = vec![
            Product::new("1", "A", "audio", Money::new(1), "/a.jpg"),
            Product::new("2", "B", "phones", Money::new(1), "/b.jpg"),
            Product::new("3", "C", "audio", Money::new(1), "/c.jpg"),
        ];
        let facets = category_facets(&products);
        assert_eq!(
            facets,
            vec![
                CategoryFacet {
                    category: CategoryId::new("audio"),
                    count: 2
                },
                CategoryFacet {
                    category: CategoryId::new("phones"),
                    count: 1
                },
            ]
        );
        assert!(category_facets(&Vec::new()).is_empty());
    }
}
