// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-subscription operator state and its lifecycle.
//!
//! An [`Operator`] only knows how to turn one accepted value into zero or one
//! output value. [`Lifecycle`] wraps it with the termination discipline shared
//! by every operator in this crate:
//!
//! ```text
//!             Next(v) -> on_value(v)
//!              +----+
//!              |    v
//!           +--------+   Error / Completed   +------------+
//!  start -> | Active | --------------------> | Terminated |  (absorbing)
//!           +--------+   forwarded once,     +------------+
//!                        state dropped
//! ```

use nwise_core::Notification;

/// Stateful transform applied to every value a source emits.
///
/// Implementations own their state exclusively; one instance serves exactly
/// one subscription and is dropped when that subscription terminates.
pub trait Operator {
    /// Values accepted from the source.
    type Input;
    /// Values forwarded downstream.
    type Output;

    /// Accepts a source value, returning the value to forward, if any.
    fn on_value(&mut self, value: Self::Input) -> Option<Self::Output>;

    /// Short operator name used in log output.
    fn name(&self) -> &'static str;
}

/// `Active` while the source may still deliver events, `Terminated` after a
/// terminal notification has been forwarded.
#[derive(Debug)]
pub enum Lifecycle<O> {
    /// Subscribed and accepting values.
    Active(O),
    /// Completion or failure forwarded; the operator state is gone.
    Terminated,
}

impl<O: Operator> Lifecycle<O> {
    /// Starts a lifecycle in the `Active` state.
    pub const fn new(operator: O) -> Self {
        Lifecycle::Active(operator)
    }

    /// Returns `true` once a terminal notification has been forwarded.
    pub const fn is_terminated(&self) -> bool {
        matches!(self, Lifecycle::Terminated)
    }

    /// Borrows the operator state while active.
    pub const fn operator(&self) -> Option<&O> {
        match self {
            Lifecycle::Active(operator) => Some(operator),
            Lifecycle::Terminated => None,
        }
    }

    /// Feeds one source event through the state machine.
    ///
    /// Returns the notification to forward downstream, if any. Terminal
    /// notifications are forwarded exactly once and release the operator
    /// state; every event after that returns `None`.
    pub fn on_notification(
        &mut self,
        notification: Notification<O::Input>,
    ) -> Option<Notification<O::Output>> {
        let Lifecycle::Active(operator) = self else {
            return None;
        };

        match notification {
            Notification::Next(value) => operator.on_value(value).map(Notification::Next),
            Notification::Error(error) => {
                debug!("{}: forwarding source error, releasing state", operator.name());
                *self = Lifecycle::Terminated;
                Some(Notification::Error(error))
            }
            Notification::Completed => {
                trace!("{}: source completed, releasing state", operator.name());
                *self = Lifecycle::Terminated;
                Some(Notification::Completed)
            }
        }
    }
}
