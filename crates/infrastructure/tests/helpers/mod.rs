pub mod fake_resolver;

pub use fake_resolver::{FakeResolver, Reply};
