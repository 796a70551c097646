//! State Modules - hit testing, pointer and scroll dispatch, input bridge.
//!
//! - hit: point-in-node tests against the last layout
//! - mouse: enter/leave, over/out, down/up and click dispatch
//! - scroll: wheel chaining and offset clamping
//! - input: crossterm event conversion

mod hit;
pub mod input;
mod mouse;
mod scroll;
