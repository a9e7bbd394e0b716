//! Truck manufacturer list scraping
//!
//! Pulls brand/company/country/continent rows out of the encyclopedia's
//! list of truck manufacturers. The page layout is matched empirically,
//! so extraction is tolerant per entry but strict about section headings.

pub mod clean;
pub mod extract;
pub mod fetch;
pub mod locate;

pub use extract::BrandExtractor;
pub use fetch::{fetch_page, DEFAULT_SOURCE_URL};
pub use locate::{locator_for, NearestHeadingLocator, SectionLocator, SiblingOffsetLocator};
