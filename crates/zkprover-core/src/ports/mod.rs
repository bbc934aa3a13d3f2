//! Ports: time, completion policy and the poll transport, kept as traits so
//! the registry and exchange loop do not depend on concrete choices.

pub mod clock;
pub mod completion;
pub mod poll_channel;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::completion::{CompletionPolicy, PollVerdict, Transition, TwoStepPolicy};
pub use self::poll_channel::PollChannel;
