//! Collapse numbered frame sequences (`render.0001.exr`, `render.0002.exr`, ...)
//! in a flat path listing into range entries (`render.1-2.exr`).

pub mod consts;
pub mod filter;
pub mod frame;
pub mod fs;
pub mod sequence;

pub use frame::{FrameMatch, FrameNumber, extract_frame};
pub use sequence::{
    CollapseOptions, Grouping, Listing, Member, Sequence, SequenceBucket, Template, collapse,
    collapse_with, group,
};
