// Copyright 2020 Graydon Hoare <graydon@pobox.com>
// Licensed under the MIT and Apache-2.0 licenses.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Structured record of one protocol decision point, emitted by
/// [`Proposer::propose_with`](crate::Proposer::propose_with) to the
/// caller-supplied [`EventSink`].
///
/// One event is emitted per acceptor per phase, one summary per phase, and
/// one final [`Outcome`]. Events are observational only; consuming or
/// dropping them never changes protocol results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event<I, V> {
    PromiseGranted {
        acceptor: I,
        number: u64,
    },
    /// `promised` is the standing higher promise that caused the denial.
    PromiseDenied {
        acceptor: I,
        number: u64,
        promised: u64,
    },
    VoteGranted {
        acceptor: I,
        number: u64,
    },
    /// `promised` is the standing higher promise that caused the denial.
    VoteDenied {
        acceptor: I,
        number: u64,
        promised: u64,
    },
    /// Phase-one tally: promises granted out of the whole roster.
    PrepareSummary {
        granted: usize,
        total: usize,
    },
    /// Phase-two tally: votes granted out of the whole roster.
    AcceptSummary {
        granted: usize,
        total: usize,
    },
    Outcome(Outcome<V>),
}

/// Terminal result of one proposal attempt. `propose` itself returns only
/// `Option<V>`; which phase a failed attempt died in is visible solely
/// through this event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<V> {
    Chosen(V),
    PrepareQuorumFailure,
    AcceptQuorumFailure,
}

/// Receiver for protocol [`Event`]s.
///
/// Stock implementations: [`NullSink`] drops everything, [`TraceSink`]
/// forwards to `tracing` at debug level, and `Vec<Event<I, V>>` records
/// the stream for later inspection. Callers with their own logging or
/// metrics substrate implement the trait on whatever forwards to it.
pub trait EventSink<I, V> {
    fn emit(&mut self, event: Event<I, V>);
}

impl<I, V> EventSink<I, V> for Vec<Event<I, V>> {
    fn emit(&mut self, event: Event<I, V>) {
        self.push(event)
    }
}

/// Sink that discards every event. Used by the plain
/// [`propose`](crate::Proposer::propose) entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<I, V> EventSink<I, V> for NullSink {
    fn emit(&mut self, _event: Event<I, V>) {}
}

/// Sink that renders each event as a `tracing` debug record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl<I: Display, V: Display> EventSink<I, V> for TraceSink {
    fn emit(&mut self, event: Event<I, V>) {
        match event {
            Event::PromiseGranted { acceptor, number } => {
                debug!("acceptor {} promised #{}", acceptor, number)
            }
            Event::PromiseDenied {
                acceptor,
                number,
                promised,
            } => debug!(
                "acceptor {} denied promise for #{} (promised #{})",
                acceptor, number, promised
            ),
            Event::VoteGranted { acceptor, number } => {
                debug!("acceptor {} voted under #{}", acceptor, number)
            }
            Event::VoteDenied {
                acceptor,
                number,
                promised,
            } => debug!(
                "acceptor {} denied vote under #{} (promised #{})",
                acceptor, number, promised
            ),
            Event::PrepareSummary { granted, total } => {
                debug!("prepare phase: {}/{} promises", granted, total)
            }
            Event::AcceptSummary { granted, total } => {
                debug!("accept phase: {}/{} votes", granted, total)
            }
            Event::Outcome(Outcome::Chosen(value)) => debug!("consensus reached on '{}'", value),
            Event::Outcome(Outcome::PrepareQuorumFailure) => {
                debug!("no consensus: prepare-phase quorum failure")
            }
            Event::Outcome(Outcome::AcceptQuorumFailure) => {
                debug!("no consensus: accept-phase quorum failure")
            }
        }
    }
}
