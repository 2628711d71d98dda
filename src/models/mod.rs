//! Data models for the Lafaek content collections.
//!
//! Wire shapes match the frontend interfaces exactly (camelCase fields,
//! parallel `…En`/`…Tet` text attributes) and tolerate loosely-typed input.

mod gallery;
mod job;
mod magazine;
mod record;
mod request;
mod story;
mod team;

pub use gallery::*;
pub use job::*;
pub use magazine::*;
pub use record::*;
pub use request::*;
pub use story::*;
pub use team::*;
