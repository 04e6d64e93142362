pub mod aggregate;
pub mod badges;
pub mod range;
pub mod trend;
pub mod worked;
