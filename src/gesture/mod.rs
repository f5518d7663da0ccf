pub mod classifier;
pub mod landmarks;
pub mod option;
pub mod poses;
pub mod scorer;

#[cfg(test)]
mod tests;
