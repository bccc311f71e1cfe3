// Copyright 2020 Graydon Hoare <graydon@pobox.com>
// Licensed under the MIT and Apache-2.0 licenses.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use tracing::trace;

/// `Acceptor`s are the voting members of the synod. Each one owns a single
/// replica's vote state: the highest proposal number it has ever promised
/// or accepted, and the value bound to its most recent successful
/// [`accept`](Acceptor::accept).
///
/// The state machine has three logical states, `Unpromised`, `Promised(n)`
/// and `Accepted(n, v)`, with `n` only ever increasing across transitions.
/// There is no terminal state: an acceptor remains perpetually available to
/// higher-numbered proposals.
///
/// The `id` is a caller-provided label used only in events and diagnostics.
/// It never participates in decision logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acceptor<I, V> {
    pub id: I,
    pub(crate) promised: Option<u64>,
    pub(crate) accepted: Option<V>,
}

/// Reply to a [`prepare`](Acceptor::prepare) request.
///
/// `promised` is the acceptor's promise after handling the request: the
/// prepared number on a grant, the standing higher promise on a denial.
///
/// `accepted` carries the acceptor's previously-accepted value whether or
/// not the promise was granted. A textbook prepare response only reports a
/// prior acceptance alongside a grant; this crate keeps the laxer reply for
/// parity with the system it models, and the proposer's value-selection
/// rule is defined in those terms. See the crate docs and `propose_with`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promise<V> {
    pub granted: bool,
    pub promised: u64,
    pub accepted: Option<V>,
}

/// Reply to an [`accept`](Acceptor::accept) request. As with [`Promise`],
/// `promised` reports the acceptor's promise after handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub granted: bool,
    pub promised: u64,
}

impl<I: Clone + Debug + Display, V: Clone + Eq + Debug + Display> Acceptor<I, V> {
    /// Returns a fresh acceptor that has promised and accepted nothing.
    pub fn new(id: I) -> Self {
        Acceptor {
            id,
            promised: None,
            accepted: None,
        }
    }

    /// The highest proposal number this acceptor has promised or accepted,
    /// if any. Monotonically non-decreasing over the acceptor's lifetime.
    pub fn promised_number(&self) -> Option<u64> {
        self.promised
    }

    /// The value bound to the most recent granted `accept`, if any.
    pub fn accepted_value(&self) -> Option<&V> {
        self.accepted.as_ref()
    }

    /// Phase-one request: ask this acceptor to promise not to accept any
    /// proposal numbered below `number`.
    ///
    /// Grants iff no promise stands or `number` is _strictly_ greater than
    /// the standing promise; a repeat of the same number is denied. On a
    /// denial the state is unchanged.
    pub fn prepare(&mut self, number: u64) -> Promise<V> {
        let granted = match self.promised {
            None => true,
            Some(promised) => number > promised,
        };
        if granted {
            trace!("acceptor {} promises #{}", self.id, number);
            self.promised = Some(number);
        } else {
            trace!(
                "acceptor {} denies promise for #{} (promised #{:?})",
                self.id,
                number,
                self.promised
            );
        }
        Promise {
            granted,
            promised: self.promised.unwrap_or(number),
            accepted: self.accepted.clone(),
        }
    }

    /// Phase-two request: ask this acceptor to vote for `value` under
    /// proposal `number`.
    ///
    /// Grants iff no promise stands or `number` is greater than _or equal
    /// to_ the standing promise. The non-strict comparison is the
    /// deliberate asymmetry with [`prepare`](Acceptor::prepare): it lets an
    /// acceptor vote within the round it just promised. On a denial the
    /// state is unchanged.
    pub fn accept(&mut self, number: u64, value: V) -> Vote {
        let granted = match self.promised {
            None => true,
            Some(promised) => number >= promised,
        };
        if granted {
            trace!("acceptor {} votes for '{}' under #{}", self.id, value, number);
            self.promised = Some(number);
            self.accepted = Some(value);
        } else {
            trace!(
                "acceptor {} denies vote for '{}' under #{} (promised #{:?})",
                self.id,
                value,
                number,
                self.promised
            );
        }
        Vote {
            granted,
            promised: self.promised.unwrap_or(number),
        }
    }
}
