//! Supporting utilities used by the thread models.

pub mod constraint;
pub mod units;
