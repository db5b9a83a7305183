mod store;

pub use store::{NewReading, ReadingStore};
