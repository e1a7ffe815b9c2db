//! Error context carrying the source location of the call that attached it.
//!
//! `loc()` and `with_loc()` behave like `anyhow`'s `context()` and
//! `with_context()`, but prefix the message with `[file:line:col]` of the
//! caller. The typed error at the bottom of the chain stays reachable through
//! `anyhow::Error::root_cause()` and `downcast_ref()`.

use std::{fmt::Display, panic::Location};

use anyhow::{Context, Result};

pub mod prelude {
    extern crate anyhow;
    pub use anyhow::{anyhow, bail, Context, Result};

    extern crate thiserror;
    pub use thiserror::Error;

    pub use super::{LocatedError, LocatedOption};
    pub use crate::loc;
}

/// Build an `Err` out of `$err`, wrapped in an `anyhow::Error` located at the macro call site.
#[macro_export]
macro_rules! loc {
    ($err:expr) => {{
        let err = $err;
        let msg = format!("[{}:{}:{}] {}", file!(), line!(), column!(), err);
        Err($crate::prelude::anyhow!(err).context(msg))
    }};
}

fn located<C: Display>(caller: &Location, context: C) -> String {
    format!("[{}:{}:{}] {context}", caller.file(), caller.line(), caller.column())
}

pub trait LocatedError<T, E> {
    /// Wrap the error value with additional context + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Wrap the error value with additional context that is evaluated lazily
    /// only once an error does occur + the location at which it was called.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> LocatedError<T, E> for Result<T, E>
where
    E: Display + Send + Sync + 'static,
    Result<T, E>: Context<T, E>,
{
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, context))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, f()))
    }
}

/// Located context for `Option`s.
///
/// The context only survives as a message: the resulting error has no typed root cause, so
/// `err.root_cause().downcast_ref::<E>()` yields `None`. Use `.ok_or(e).loc(..)` to keep `e` as the
/// root cause.
pub trait LocatedOption<T> {
    /// Convert `None` into an error carrying `context` + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Convert `None` into an error carrying a lazily evaluated context + the location at which
    /// it was called.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> LocatedOption<T> for Option<T> {
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, context))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let caller = Location::caller();
        self.with_context(|| located(caller, f()))
    }
}
