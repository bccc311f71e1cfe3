// Copyright 2020 Graydon Hoare <graydon@pobox.com>
// Licensed under the MIT and Apache-2.0 licenses.

/*!
 * This crate implements the decision core of single-decree Paxos: the
 * protocol by which one proposer and a fixed roster of acceptors agree on a
 * single value through two majority-voted phases. It deliberately models
 * _only_ the decision logic:
 *
 *   - `Acceptor` is the per-replica vote state machine, exposing the two
 *     protocol operations `prepare` and `accept`.
 *
 *   - `Proposer` orchestrates one proposal attempt across a roster,
 *     computing quorums and selecting the value to push in phase two.
 *
 * Everything around the decision core is left to the caller: there is no
 * transport (every call is a synchronous in-process invocation with no
 * loss, delay or partial failure), no durable acceptor state, no retry
 * loop, no leader election, and no support for concurrent proposers. A
 * caller that observes a failed attempt is responsible for retrying with a
 * fresh, higher proposal number.
 *
 * The core reports every decision point -- each promise or vote granted or
 * denied, per-phase tallies, and the final outcome -- as structured
 * [`Event`]s delivered to a caller-supplied [`EventSink`]. Sinks are purely
 * observational and never influence protocol results.
 *
 * ## Reference
 *
 * Leslie Lamport. Paxos Made Simple. ACM SIGACT News 32, 4 (December
 * 2001), 51-58.
 *
 * ## Name
 *
 * Lamport's papers call the single-value protocol the "synod" algorithm,
 * after the assembly of part-time legislators of Paxos whose collective
 * memory survives any individual member wandering off.
 */

// TODO: optional parallel fan-out behind a deterministic re-ordering step.

mod acceptor;
mod event;
mod proposer;
mod quorum;

pub use acceptor::{Acceptor, Promise, Vote};
pub use event::{Event, EventSink, NullSink, Outcome, TraceSink};
pub use proposer::Proposer;
pub use quorum::{reached, threshold};
