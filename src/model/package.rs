// src/model/package.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Wall-clock instant used for arrivals, expiries and scan times.
pub type Timestamp = DateTime<Utc>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Normal,
    Perishable,
    Return,
}

impl Category {
    /// Leading letter of generated package ids (e.g. `P` in `P004`).
    pub fn id_prefix(&self) -> char {
        match self {
            Category::Normal => 'N',
            Category::Perishable => 'P',
            Category::Return => 'R',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Perishable => "perishable",
            Category::Return => "return",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single package moving through the warehouse.
///
/// Packages are never mutated once built. Category and expiry are
/// independent: a perishable package may have no expiry date and a
/// return may carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    id: String,
    name: String,
    category: Category,
    arrival_time: Timestamp,
    expiry_time: Option<Timestamp>,
}

impl Package {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        arrival_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            arrival_time,
            expiry_time: None,
        }
    }

    /// Sets the expiry date. No ordering against `arrival_time` is enforced.
    pub fn with_expiry(mut self, expiry_time: Timestamp) -> Self {
        self.expiry_time = Some(expiry_time);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn expiry_time(&self) -> Option<Timestamp> {
        self.expiry_time
    }

    /// True when the package has an expiry strictly before `now`.
    /// Packages without an expiry never expire.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expiry_time.is_some_and(|expiry| expiry < now)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expiry_time {
            Some(expiry) => write!(
                f,
                "Package {}: {} (expires: {})",
                self.id,
                self.name,
                expiry.format("%Y-%m-%d")
            ),
            None => write!(f, "Package {}: {}", self.id, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_display_without_expiry() {
        let pkg = Package::new("N001", "Book", Category::Normal, start());
        assert_eq!(pkg.to_string(), "Package N001: Book");
    }

    #[test]
    fn test_display_with_expiry() {
        let pkg = Package::new("P001", "Milk", Category::Perishable, start())
            .with_expiry(start() + Duration::days(6));
        assert_eq!(pkg.to_string(), "Package P001: Milk (expires: 2024-03-07)");
    }

    #[test]
    fn test_expiry_is_strict() {
        let expiry = start() + Duration::days(2);
        let pkg = Package::new("P002", "Yogurt", Category::Perishable, start()).with_expiry(expiry);

        assert!(!pkg.is_expired_at(expiry - Duration::seconds(1)));
        assert!(!pkg.is_expired_at(expiry));
        assert!(pkg.is_expired_at(expiry + Duration::seconds(1)));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let pkg = Package::new("P003", "Fruit", Category::Perishable, start());
        assert!(!pkg.is_expired_at(start() + Duration::days(10_000)));
    }

    #[test]
    fn test_category_and_expiry_are_independent() {
        // An expiry before arrival is accepted as-is.
        let pkg = Package::new("R001", "Tablet", Category::Return, start())
            .with_expiry(start() - Duration::days(1));
        assert_eq!(pkg.category(), Category::Return);
        assert!(pkg.is_expired_at(start()));
    }

    #[test]
    fn test_id_prefixes() {
        assert_eq!(Category::Normal.id_prefix(), 'N');
        assert_eq!(Category::Perishable.id_prefix(), 'P');
        assert_eq!(Category::Return.id_prefix(), 'R');
    }
}
