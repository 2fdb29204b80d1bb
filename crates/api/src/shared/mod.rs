pub mod extractors;
pub mod usecase;

#[cfg(test)]
pub mod testing;
