// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounce timer bookkeeping.
//!
//! The debouncer doesn't sleep. It hands out a [`DebounceTicket`] per
//! keystroke and decides whether a ticket may still fire. The host drives
//! time: either it calls [`Debouncer::poll`] with the current instant, or its
//! own timer calls [`Debouncer::fire`] with the ticket it was armed with.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **AT_MOST_ONE_PENDING**: scheduling a ticket supersedes the previous one
//! 2. **FIRE_ONCE**: a ticket fires at most once; a superseded or cancelled
//!    ticket never fires
//! 3. **CANCEL_IDEMPOTENT**: cancelling with nothing pending is a no-op

use std::time::{Duration, Instant};

/// Handle for one scheduled debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    deadline: Instant,
}

impl DebounceTicket {
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<DebounceTicket>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel whatever is pending and arm a new ticket `delay` after `now`.
    pub fn schedule(&mut self, now: Instant) -> DebounceTicket {
        // INVARIANT: AT_MOST_ONE_PENDING
        self.cancel();
        self.generation += 1;
        let ticket = DebounceTicket {
            generation: self.generation,
            deadline: now + self.delay,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Drop the pending ticket, if any. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        // INVARIANT: CANCEL_IDEMPOTENT
        self.pending.take().is_some()
    }

    /// Claim `ticket`. True exactly once, and only for the current ticket.
    ///
    /// The deadline is the caller's responsibility here: a host timer that
    /// woke up for this ticket has, by definition, waited long enough.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        // INVARIANT: FIRE_ONCE
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Claim the pending ticket if its deadline has passed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<DebounceTicket> {
        match self.pending {
            Some(ticket) if now >= ticket.deadline => {
                self.pending = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn pending(&self) -> Option<DebounceTicket> {
        self.pending
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
