pub mod analysis;
pub mod net;
pub mod report;
pub mod scenario;
pub mod traffic;

#[cfg(test)]
mod test;
