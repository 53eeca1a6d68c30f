pub mod create;
pub mod list;

pub use create::AddFairCv;
pub use list::FairCvList;
