pub mod test_claim;
pub mod test_lifecycle;
