use storefront::{PriceBand, Product, ProductCatalog, ProductId, RatingBand};

use crate::support::{product, products};

fn ids(catalog: &ProductCatalog) -> Vec<ProductId> {
    catalog.filtered().iter().map(|p| p.id).collect()
}

fn expected(all: &[Product], category: &str, price: PriceBand, rating: RatingBand) -> Vec<ProductId> {
    all.iter()
        .filter(|p| category == "All" || p.category.eq_ignore_ascii_case(category))
        .filter(|p| price.contains(p.price))
        .filter(|p| rating.contains(p.rating.rate))
        .map(|p| p.id)
        .collect()
}

#[test]
fn filtered_view_tracks_every_selector_combination() {
    let all = products();
    let mut catalog = ProductCatalog::new();
    catalog.load(all.clone());

    for category in ["All", "electronics", "JEWELERY", "men's clothing", "garden"] {
        for price in PriceBand::ALL {
            for rating in RatingBand::ALL {
                // Apply the selectors in a different order each time.
                if price == PriceBand::Any {
                    catalog.set_rating_band(rating);
                    catalog.set_category(category);
                    catalog.set_price_band(price);
                } else {
                    catalog.set_price_band(price);
                    catalog.set_category(category);
                    catalog.set_rating_band(rating);
                }
                assert_eq!(
                    ids(&catalog),
                    expected(&all, category, price, rating),
                    "category={} price={} rating={}",
                    category,
                    price,
                    rating
                );
            }
        }
    }
}

#[test]
fn category_scenario() {
    let mut catalog = ProductCatalog::new();
    catalog.load(vec![product(1, "A", 30.0, 1.5), product(2, "B", 80.0, 4.2)]);

    catalog.set_category("B");
    assert_eq!(ids(&catalog), vec![2]);
}

#[test]
fn price_scenario() {
    let mut catalog = ProductCatalog::new();
    catalog.load(vec![product(1, "A", 30.0, 1.5), product(2, "B", 80.0, 4.2)]);

    catalog.set_price_band("0-50".parse().unwrap());
    assert_eq!(ids(&catalog), vec![1]);
}

#[test]
fn rating_boundary_matches_both_bands() {
    let mut catalog = ProductCatalog::new();
    catalog.load(products());

    catalog.set_rating_band(RatingBand::OneToTwo);
    assert!(ids(&catalog).contains(&3));
    catalog.set_rating_band(RatingBand::TwoToThree);
    assert!(ids(&catalog).contains(&3));
}

#[test]
fn empty_catalog() {
    let mut catalog = ProductCatalog::new();
    catalog.load(Vec::new());
    catalog.set_category("electronics");
    assert!(catalog.filtered().is_empty());
}

#[test]
fn reload_keeps_selectors() {
    let mut catalog = ProductCatalog::new();
    catalog.load(products());
    catalog.set_category("jewelery");

    catalog.load(vec![product(9, "jewelery", 5.0, 5.0), product(10, "toys", 5.0, 5.0)]);
    assert_eq!(ids(&catalog), vec![9]);
    assert_eq!(catalog.filter().category, "jewelery");
}

#[test]
fn every_listed_category_selects_a_distinct_set() {
    let mut catalog = ProductCatalog::new();
    catalog.load(products());
    let categories: Vec<String> = catalog.categories().iter().map(|c| c.to_string()).collect();
    assert_eq!(
        categories,
        vec!["All", "men's clothing", "jewelery", "electronics", "women's clothing"]
    );

    let mut selections = Vec::new();
    for category in &categories {
        catalog.set_category(category.as_str());
        selections.push(ids(&catalog));
    }
    for (i, selection) in selections.iter().enumerate() {
        assert!(!selections[i + 1..].contains(selection), "{} repeats a selection", categories[i]);
    }
}
