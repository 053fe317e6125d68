pub mod criteria;

pub use criteria::matches;
