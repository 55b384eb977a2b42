//! Deterministic sample values for tests and previews.
//!
//! `#[derive(Fixture)]` gives a struct or enum a `fixture()` sample, and a
//! struct additionally gets a `fixture_new(...)` constructor, a mutable
//! `<Name>FixtureBuilder` and a `fixture_with(|builder| ...)` factory. Field
//! values come from [`Sampleable`], implemented here for the primitive and
//! common standard-library types and by the derive for the deriving type.
//!
//! ```
//! use fixturize::{Fixture, Sampleable};
//!
//! #[derive(Debug, PartialEq, Fixture)]
//! pub struct Config {
//!     #[fixture(default)]
//!     pub timeout: u64,
//!     pub name: String,
//! }
//!
//! let config = Config::fixture_with(|c| c.name = "primary".to_owned());
//! assert_eq!(config.timeout, 0);
//! assert_eq!(config.name, "primary");
//! assert_eq!(Config::sample(), Config::fixture());
//! ```

mod sample;

pub use sample::Sampleable;

#[cfg(feature = "derive")]
pub use fixturize_derive::Fixture;

pub mod prelude {
    pub use crate::Sampleable;
    #[cfg(feature = "derive")]
    pub use fixturize_derive::Fixture;
}
