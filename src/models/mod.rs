//! CPU scheduling domain models.
//!
//! Provides the data types shared by every policy: the input process
//! record, the per-process result, the policy selector, and the execution
//! timeline with its builder.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term | Batch system |
//! |------------|---------------|--------------|
//! | Process | Job / PCB | Submitted job |
//! | Segment | Gantt block | Run slice |
//! | Timeline | Gantt chart | Execution log |
//! | ProcessResult | Per-process statistics | Job accounting record |

mod policy;
mod process;
mod timeline;

pub use policy::{PolicyKind, UnknownPolicy};
pub use process::{Process, ProcessResult};
pub use timeline::{Occupant, Segment, Timeline, TimelineBuilder};
