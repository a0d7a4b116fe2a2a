//! Host frame loop.
//!
//! The poller was written for a game-engine update callback; this module
//! is that host made concrete: a fixed-rate loop that ticks the poller
//! once per frame and owns nothing else. Fetch chains it triggers run as
//! detached tasks, so a suspended chain never stalls the loop.

pub mod frame_loop;

pub use frame_loop::FrameLoop;
