pub mod columns;
pub mod frames;
pub mod indicator;
pub mod location;
pub mod risk;
pub mod yearly;
