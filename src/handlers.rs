pub mod dashboard;
pub mod departments;
pub mod suppliers;

#[cfg(test)]
pub(crate) mod test_support;
