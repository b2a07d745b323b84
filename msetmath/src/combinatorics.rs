pub mod aggregate;
pub mod enumerate;
pub mod factorial;
pub mod partition;
