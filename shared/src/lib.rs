//! Types shared between the cell arena server and its browser client.

pub mod point;

pub use point::{point, Point};
