//! Monotonic tickets for overlapping list requests.
//!
//! A list request may still be in flight when the user switches tabs or a
//! mutation triggers a refresh. Only the response to the most recently issued
//! ticket may replace the visible list; anything older is stale.

/// Ticket handed out when a request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Hand back `response` only if `ticket` is still the latest one issued.
    pub fn accept<T>(&self, ticket: RequestTicket, response: T) -> Option<T> {
        self.is_latest(ticket).then_some(response)
    }
}
