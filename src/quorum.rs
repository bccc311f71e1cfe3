// Copyright 2020 Graydon Hoare <graydon@pobox.com>
// Licensed under the MIT and Apache-2.0 licenses.

/// Majority arithmetic shared by both protocol phases.
///
/// The threshold is `floor(total / 2) + 1` over the _total_ roster size,
/// not the count of responders; the core models perfect reachability, so
/// the two are the same. Note `threshold(0) == 1`, which no tally can
/// meet: an empty roster always fails rather than erroring.
pub fn threshold(total: usize) -> usize {
    total / 2 + 1
}

/// Returns true iff `count` grants out of `total` members form a majority.
pub fn reached(count: usize, total: usize) -> bool {
    count >= threshold(total)
}
