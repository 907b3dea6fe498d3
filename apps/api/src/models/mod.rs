pub mod test_case;
pub mod validation;
