//! Shared fakes and fixtures for the pipeline tests.

pub mod fakes;
pub mod fixtures;

pub use fakes::{FakeGeocoder, FakeMatrix};
pub use fixtures::TestFixtures;
