// Copyright 2020 Graydon Hoare <graydon@pobox.com>
// Licensed under the MIT and Apache-2.0 licenses.

use crate::{quorum, Acceptor, Event, EventSink, NullSink, Outcome};
use itertools::Itertools;
use std::fmt::{Debug, Display};
use tracing::debug;

/// `Proposer`s run one attempt to get a value chosen by a roster of
/// [`Acceptor`]s. A proposer is ephemeral: it is built with a proposal
/// number and a candidate value, consumed by a single call to
/// [`propose`](Proposer::propose), and holds the value only for the
/// duration of that call.
///
/// The attempt is the classic two-phase round. Phase one asks every
/// acceptor in roster order for a promise and collects any
/// previously-accepted values; phase two, reached only on a majority of
/// promises, pushes the selected value to every acceptor and succeeds on a
/// majority of votes. Either quorum failing yields `None` -- never an
/// error, and deliberately indistinguishable by phase from the return
/// value alone (attach an [`EventSink`] to see which phase died).
///
/// Nothing is retried: the caller owns the decision to try again with a
/// fresh, higher proposal number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposer<V> {
    number: u64,
    value: V,
}

impl<V: Clone + Eq + Debug + Display> Proposer<V> {
    pub fn new(number: u64, value: V) -> Self {
        Proposer { number, value }
    }

    /// Runs one proposal attempt against `roster`, discarding events.
    pub fn propose<I>(self, roster: &mut [Acceptor<I, V>]) -> Option<V>
    where
        I: Clone + Debug + Display,
    {
        self.propose_with(roster, &mut NullSink)
    }

    /// Runs one proposal attempt against `roster`, reporting every
    /// decision point to `sink`.
    ///
    /// Both phases fan out sequentially in roster order and tally grants
    /// against the shared majority threshold over the _total_ roster size
    /// ([`quorum::threshold`](crate::threshold)). An empty roster can
    /// therefore never reach quorum and always returns `None`.
    ///
    /// Value selection keeps two deliberate quirks of the system this
    /// crate models, both pinned by tests:
    ///
    ///   - every previously-accepted value reported during phase one is
    ///     collected, _including_ those reported alongside a denied
    ///     promise (see [`Promise`](crate::Promise));
    ///
    ///   - if any were collected, the value pushed in phase two is the
    ///     last one in roster order, not the one accepted under the
    ///     highest proposal number as in textbook Paxos.
    ///
    /// The sequential fan-out makes "last in roster order" deterministic.
    pub fn propose_with<I, S>(self, roster: &mut [Acceptor<I, V>], sink: &mut S) -> Option<V>
    where
        I: Clone + Debug + Display,
        S: EventSink<I, V>,
    {
        let total = roster.len();
        debug!(
            "proposing #{} value '{}' to [{}]",
            self.number,
            self.value,
            roster.iter().map(|a| &a.id).format(", ")
        );

        // Phase 1: collect promises and previously-accepted values.
        let mut granted = 0;
        let mut prior: Vec<V> = Vec::new();
        for acc in roster.iter_mut() {
            let promise = acc.prepare(self.number);
            if promise.granted {
                granted += 1;
                sink.emit(Event::PromiseGranted {
                    acceptor: acc.id.clone(),
                    number: self.number,
                });
            } else {
                sink.emit(Event::PromiseDenied {
                    acceptor: acc.id.clone(),
                    number: self.number,
                    promised: promise.promised,
                });
            }
            if let Some(v) = promise.accepted {
                prior.push(v);
            }
        }
        sink.emit(Event::PrepareSummary { granted, total });
        debug!("prepare #{}: {}/{} promises", self.number, granted, total);

        if !quorum::reached(granted, total) {
            sink.emit(Event::Outcome(Outcome::PrepareQuorumFailure));
            return None;
        }

        let chosen = match prior.into_iter().last() {
            Some(v) => v,
            None => self.value,
        };

        // Phase 2: push the chosen value and tally votes.
        let mut granted = 0;
        for acc in roster.iter_mut() {
            let vote = acc.accept(self.number, chosen.clone());
            if vote.granted {
                granted += 1;
                sink.emit(Event::VoteGranted {
                    acceptor: acc.id.clone(),
                    number: self.number,
                });
            } else {
                sink.emit(Event::VoteDenied {
                    acceptor: acc.id.clone(),
                    number: self.number,
                    promised: vote.promised,
                });
            }
        }
        sink.emit(Event::AcceptSummary { granted, total });
        debug!("accept #{}: {}/{} votes", self.number, granted, total);

        if quorum::reached(granted, total) {
            debug!("consensus reached on '{}'", chosen);
            sink.emit(Event::Outcome(Outcome::Chosen(chosen.clone())));
            Some(chosen)
        } else {
            sink.emit(Event::Outcome(Outcome::AcceptQuorumFailure));
            None
        }
    }
}
