// src/io/packages.rs

use crate::model::package::{Category, Package, Timestamp};
use chrono::Duration;
use rand::Rng;

const NORMAL_PRODUCTS: [&str; 5] = ["Book", "Clothing", "Electronics", "Toy", "Tool"];
const PERISHABLE_PRODUCTS: [&str; 5] = ["Milk", "Yogurt", "Fruit", "Vegetables", "Meat"];
const RETURN_PRODUCTS: [&str; 5] = ["Phone", "Tablet", "Shoes", "Lamp", "Chair"];

/// Product names a generated package of `category` is drawn from.
pub fn catalogue(category: Category) -> &'static [&'static str] {
    match category {
        Category::Normal => &NORMAL_PRODUCTS,
        Category::Perishable => &PERISHABLE_PRODUCTS,
        Category::Return => &RETURN_PRODUCTS,
    }
}

/// Generates `count` sample packages of one category.
///
/// # Arguments
/// * `count` - Number of packages to build.
/// * `category` - Category of every package; also picks the id prefix and product names.
/// * `base_time` - Arrival of the first package. Each next one arrives an hour later.
/// * `rng` - Source for product names and shelf lives. Pass a seeded rng for repeatable runs.
///
/// Ids are numbered from 1 (`N001`, `N002`, ...). Perishable packages expire
/// 1 to 7 days after arrival; the other categories never expire.
pub fn generate_packages<R: Rng + ?Sized>(
    count: usize,
    category: Category,
    base_time: Timestamp,
    rng: &mut R,
) -> Vec<Package> {
    let names = catalogue(category);
    let mut packages = Vec::with_capacity(count);

    for i in 0..count {
        let name = names[rng.gen_range(0..names.len())];
        let arrival = base_time + Duration::hours(i as i64);
        let id = format!("{}{:03}", category.id_prefix(), i + 1);

        let mut package = Package::new(id, name, category, arrival);
        if category == Category::Perishable {
            let shelf_life = rng.gen_range(1..=7);
            package = package.with_expiry(arrival + Duration::days(shelf_life));
        }
        packages.push(package);
    }

    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_ids_and_arrivals() {
        let mut rng = StdRng::seed_from_u64(7);
        let packages = generate_packages(12, Category::Normal, base(), &mut rng);

        assert_eq!(packages.len(), 12);
        assert_eq!(packages[0].id(), "N001");
        assert_eq!(packages[11].id(), "N012");
        assert_eq!(packages[3].arrival_time(), base() + Duration::hours(3));
        assert!(packages.iter().all(|p| p.expiry_time().is_none()));
        assert!(packages.iter().all(|p| NORMAL_PRODUCTS.contains(&p.name())));
    }

    #[test]
    fn test_perishable_shelf_life_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let packages = generate_packages(200, Category::Perishable, base(), &mut rng);

        for p in &packages {
            assert!(p.id().starts_with('P'));
            let expiry = p.expiry_time().expect("perishables carry an expiry");
            let days = (expiry - p.arrival_time()).num_days();
            assert!((1..=7).contains(&days), "shelf life {} out of range", days);
        }
    }

    #[test]
    fn test_returns_use_return_catalogue() {
        let mut rng = StdRng::seed_from_u64(1);
        let packages = generate_packages(8, Category::Return, base(), &mut rng);

        assert_eq!(packages[7].id(), "R008");
        assert!(packages.iter().all(|p| RETURN_PRODUCTS.contains(&p.name())));
        assert!(packages.iter().all(|p| p.category() == Category::Return));
    }

    #[test]
    fn test_same_seed_same_packages() {
        let a = generate_packages(10, Category::Perishable, base(), &mut StdRng::seed_from_u64(9));
        let b = generate_packages(10, Category::Perishable, base(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_packages(0, Category::Normal, base(), &mut rng).is_empty());
    }
}
