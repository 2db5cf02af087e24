pub mod insight;
pub mod profile;
