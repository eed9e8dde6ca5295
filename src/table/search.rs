//! Debounced Search
//!
//! Keystrokes arm a quiet-period timer; only the last query of a burst is
//! fetched. Every fetch carries a generation number and a response is applied
//! only if no newer request was issued after it. Time is passed in as
//! milliseconds so the state machine is independent of the browser clock.

/// Monotonic request counter. Responses of superseded generations are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    /// Start a new request, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    /// Supersede whatever is in flight without starting anything
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Fetch to perform once the quiet period is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    delay_ms: f64,
    /// Text shown in the input
    input: String,
    /// Query waiting for its quiet period, with its deadline
    armed: Option<(String, f64)>,
    gate: RequestGate,
    in_flight: Option<u64>,
}

impl SearchController {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: f64::from(delay_ms),
            input: String::new(),
            armed: None,
            gate: RequestGate::default(),
            in_flight: None,
        }
    }

    /// Start with text already in the input, nothing armed
    pub fn with_input(mut self, value: impl Into<String>) -> Self {
        self.set_input(value);
        self
    }

    /// Change the text without arming a search
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Keystroke at `now_ms`: update the input and re-arm the timer.
    /// A fetch still in flight is superseded.
    pub fn on_input(&mut self, value: impl Into<String>, now_ms: f64) {
        let value = value.into();
        self.input = value.clone();
        self.armed = Some((value, now_ms + self.delay_ms));
        if self.in_flight.take().is_some() {
            self.gate.invalidate();
        }
    }

    /// Milliseconds until the armed query is due
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.armed.as_ref().map(|(_, due)| (due - now_ms).max(0.0))
    }

    /// Timer fired at `now_ms`. Yields the fetch to issue if the quiet period
    /// has elapsed, otherwise nothing (a later keystroke re-armed the timer).
    pub fn on_timer(&mut self, now_ms: f64) -> Option<SearchTicket> {
        match &self.armed {
            Some((_, due)) if *due <= now_ms => {}
            _ => return None,
        }
        let (query, _) = self.armed.take()?;
        let generation = self.gate.issue();
        self.in_flight = Some(generation);
        Some(SearchTicket { generation, query })
    }

    /// Response for `generation` arrived. Returns whether it may be applied.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
        self.gate.is_current(generation)
    }

    /// A request is armed or in flight
    pub fn is_busy(&self) -> bool {
        self.armed.is_some() || self.in_flight.is_some()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a keystroke burst and fire the timer after every event like the
    /// browser would, collecting the fetches issued.
    fn run_burst(keys: &[(&str, f64)], delay: u32) -> Vec<SearchTicket> {
        let mut ctl = SearchController::new(delay);
        let mut issued = Vec::new();
        let mut timers: Vec<f64> = Vec::new();
        for (text, at) in keys {
            // timers due before this keystroke fire first
            timers.sort_by(|a, b| a.total_cmp(b));
            while let Some(t) = timers.first().copied().filter(|t| *t <= *at) {
                timers.remove(0);
                issued.extend(ctl.on_timer(t));
            }
            ctl.on_input(*text, *at);
            timers.push(*at + f64::from(delay));
        }
        timers.sort_by(|a, b| a.total_cmp(b));
        for t in timers {
            issued.extend(ctl.on_timer(t));
        }
        issued
    }

    #[test]
    fn test_burst_issues_one_fetch_with_last_text() {
        let keys = [("w", 0.0), ("wa", 120.0), ("wat", 250.0), ("wate", 400.0), ("water", 699.0)];
        let issued = run_burst(&keys, 300);
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].query, "water");
    }

    #[test]
    fn test_pause_splits_bursts() {
        let keys = [("p", 0.0), ("pa", 100.0), ("par", 450.0), ("park", 500.0)];
        let issued = run_burst(&keys, 300);
        let queries: Vec<_> = issued.iter().map(|t| t.query.as_str()).collect();
        assert_eq!(queries, vec!["pa", "park"]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut ctl = SearchController::new(300);
        ctl.on_input("a", 0.0);
        let first = ctl.on_timer(300.0).unwrap();
        assert!(ctl.is_fetching());

        // newer keystroke while the first fetch is in flight
        ctl.on_input("ab", 350.0);
        assert!(ctl.on_timer(500.0).is_none());
        let second = ctl.on_timer(650.0).unwrap();

        // the second response wins even if the first one arrives last
        assert!(ctl.complete(second.generation));
        assert!(!ctl.complete(first.generation));
        assert!(!ctl.is_busy());
    }

    #[test]
    fn test_keystroke_cancels_in_flight() {
        let mut ctl = SearchController::new(300);
        ctl.on_input("x", 0.0);
        let ticket = ctl.on_timer(300.0).unwrap();
        ctl.on_input("xy", 310.0);
        assert!(!ctl.complete(ticket.generation));
        assert!(ctl.is_busy());
        assert_eq!(ctl.input(), "xy");
    }

    #[test]
    fn test_gate() {
        let mut gate = RequestGate::default();
        let a = gate.issue();
        let b = gate.issue();
        assert!(!gate.is_current(a));
        assert!(gate.is_current(b));
        gate.invalidate();
        assert!(!gate.is_current(b));
    }
}
