//! Study input records

mod row;

pub use row::{RawScore, StudyRow};
