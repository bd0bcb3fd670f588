pub mod dates;
pub mod storage;
