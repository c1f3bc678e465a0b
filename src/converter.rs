//! Converter state and its transitions.
//!
//! [`ConverterState`] is a plain value. Every change goes through [`reduce`],
//! which takes the old state and an [`Event`] and returns the new one, so the
//! UI thread is the only writer and each transition can be tested without a
//! window or a network.

use crate::catalog;
use crate::constants::{DEFAULT_AMOUNT, DEFAULT_SOURCE, DEFAULT_TARGET, ERROR_TEXT, FALLBACK_AMOUNT};
use crate::types::{FetchCompletion, FetchRequest};

/// What the result area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultText {
    Empty,
    Value(String),
    Error,
}

impl ResultText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResultText::Empty => None,
            ResultText::Value(v) => Some(v),
            ResultText::Error => Some(ERROR_TEXT),
        }
    }
}

/// How completions of overlapping requests are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOrder {
    /// Only the most recently issued request may change visible state
    Sequenced,
    /// Whichever request resolves last wins
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub source: String,
    pub target: String,
    /// Raw text of the amount field
    pub amount: String,
    pub rate: Option<f64>,
    pub result: ResultText,
    pub loading: bool,
    pub dark: bool,
    pub updated_unix: Option<i64>,
    /// Sequence number of the last issued request, 0 before the first one
    pub next_seq: u64,
    pub order: CompletionOrder,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_TARGET, CompletionOrder::Sequenced)
    }
}

impl ConverterState {
    /// Codes outside the catalog fall back to the built-in defaults.
    pub fn new(source: &str, target: &str, order: CompletionOrder) -> Self {
        let pick = |code: &str, fallback: &str| {
            if catalog::contains(code) {
                code.to_string()
            } else {
                fallback.to_string()
            }
        };
        Self {
            source: pick(source, DEFAULT_SOURCE),
            target: pick(target, DEFAULT_TARGET),
            amount: DEFAULT_AMOUNT.to_string(),
            rate: None,
            result: ResultText::Empty,
            loading: false,
            dark: false,
            updated_unix: None,
            next_seq: 0,
            order,
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.result, self.loading) {
            (_, true) => Phase::Loading,
            (ResultText::Empty, false) => Phase::Idle,
            (ResultText::Value(_), false) => Phase::Succeeded,
            (ResultText::Error, false) => Phase::Failed,
        }
    }

    /// The request for the most recent `FetchStarted`
    pub fn pending_request(&self) -> FetchRequest {
        FetchRequest {
            seq: self.next_seq,
            source: self.source.clone(),
            target: self.target.clone(),
            amount: self.amount.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetSource(String),
    SetTarget(String),
    SetAmount(String),
    SwapCurrencies,
    ToggleTheme,
    FetchStarted,
    FetchCompleted(FetchCompletion),
}

pub fn reduce(state: ConverterState, event: Event) -> ConverterState {
    match event {
        Event::SetSource(code) if catalog::contains(&code) => ConverterState {
            source: code,
            ..state
        },
        Event::SetTarget(code) if catalog::contains(&code) => ConverterState {
            target: code,
            ..state
        },
        Event::SetSource(_) | Event::SetTarget(_) => state,
        Event::SetAmount(amount) => ConverterState { amount, ..state },
        Event::SwapCurrencies => ConverterState {
            source: state.target.clone(),
            target: state.source.clone(),
            ..state
        },
        Event::ToggleTheme => ConverterState {
            dark: !state.dark,
            ..state
        },
        Event::FetchStarted => ConverterState {
            loading: true,
            next_seq: state.next_seq + 1,
            ..state
        },
        Event::FetchCompleted(completion) => apply_completion(state, completion),
    }
}

fn apply_completion(state: ConverterState, completion: FetchCompletion) -> ConverterState {
    if state.order == CompletionOrder::Sequenced && completion.request.seq != state.next_seq {
        tracing::debug!(
            seq = completion.request.seq,
            latest = state.next_seq,
            "Discarding stale rate response"
        );
        return state;
    }

    match completion.quote {
        Some(quote) => {
            let amount = parse_amount(&completion.request.amount);
            ConverterState {
                rate: Some(quote.rate),
                result: ResultText::Value(format_result(amount, quote.rate)),
                updated_unix: quote.updated_unix,
                loading: false,
                ..state
            }
        }
        None => {
            // Legacy keeps the last rate unless the response lacked the target
            let keep_rate = state.order == CompletionOrder::Legacy && !completion.rate_missing;
            ConverterState {
                rate: state.rate.filter(|_| keep_rate),
                updated_unix: state.updated_unix.filter(|_| keep_rate),
                result: ResultText::Error,
                loading: false,
                ..state
            }
        }
    }
}

/// Parse the amount field. Anything that is not a finite number above zero
/// becomes [`FALLBACK_AMOUNT`].
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => FALLBACK_AMOUNT,
    }
}

pub fn format_result(amount: f64, rate: f64) -> String {
    format!("{:.4}", amount * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quote;

    fn with_inputs(source: &str, target: &str, amount: &str) -> ConverterState {
        let state = ConverterState::default();
        let state = reduce(state, Event::SetSource(source.into()));
        let state = reduce(state, Event::SetTarget(target.into()));
        reduce(state, Event::SetAmount(amount.into()))
    }

    fn start(state: ConverterState) -> (ConverterState, FetchRequest) {
        let state = reduce(state, Event::FetchStarted);
        let request = state.pending_request();
        (state, request)
    }

    fn succeed(request: FetchRequest, rate: f64) -> Event {
        Event::FetchCompleted(FetchCompletion {
            request,
            quote: Some(Quote {
                rate,
                updated_unix: Some(1_760_659_351),
            }),
            rate_missing: false,
        })
    }

    fn fail(request: FetchRequest) -> Event {
        Event::FetchCompleted(FetchCompletion {
            request,
            quote: None,
            rate_missing: false,
        })
    }

    fn fail_missing(request: FetchRequest) -> Event {
        Event::FetchCompleted(FetchCompletion {
            request,
            quote: None,
            rate_missing: true,
        })
    }

    #[test]
    fn defaults() {
        let state = ConverterState::default();
        assert_eq!(state.source, "USD");
        assert_eq!(state.target, "INR");
        assert_eq!(state.amount, "1");
        assert_eq!(state.rate, None);
        assert_eq!(state.result, ResultText::Empty);
        assert!(!state.loading);
        assert!(!state.dark);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn new_rejects_unknown_codes() {
        let state = ConverterState::new("XYZ", "EUR", CompletionOrder::Legacy);
        assert_eq!(state.source, "USD");
        assert_eq!(state.target, "EUR");
        assert_eq!(state.order, CompletionOrder::Legacy);
    }

    #[test]
    fn parse_amount_falls_back_to_one() {
        assert_eq!(parse_amount("10"), 10.0);
        assert_eq!(parse_amount(" 2.5 "), 2.5);
        assert_eq!(parse_amount(""), 1.0);
        assert_eq!(parse_amount("abc"), 1.0);
        assert_eq!(parse_amount("0"), 1.0);
        assert_eq!(parse_amount("-3"), 1.0);
        assert_eq!(parse_amount("NaN"), 1.0);
        assert_eq!(parse_amount("inf"), 1.0);
    }

    #[test]
    fn usd_to_inr_scenario() {
        let (state, request) = start(with_inputs("USD", "INR", "10"));
        assert_eq!(state.phase(), Phase::Loading);
        let state = reduce(state, succeed(request, 83.1234));
        assert_eq!(state.result.as_str(), Some("831.2340"));
        assert_eq!(state.rate, Some(83.1234));
        assert_eq!(state.updated_unix, Some(1_760_659_351));
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Succeeded);
    }

    #[test]
    fn invalid_amount_uses_one() {
        let (state, request) = start(with_inputs("EUR", "GBP", ""));
        let state = reduce(state, succeed(request, 0.85));
        assert_eq!(state.result.as_str(), Some("0.8500"));
    }

    #[test]
    fn every_pair_formats_to_four_places() {
        let codes: Vec<&str> = catalog::all().iter().map(|c| c.code).collect();
        for a in &codes {
            for b in codes.iter().filter(|b| *b != a) {
                let (state, request) = start(with_inputs(a, b, "3"));
                let state = reduce(state, succeed(request, 1.23456789));
                assert_eq!(state.result, ResultText::Value("3.7037".into()), "{a}->{b}");
                assert_eq!(state.source, *a);
                assert_eq!(state.target, *b);
            }
        }
    }

    #[test]
    fn failure_shows_sentinel_and_stops_loading() {
        let (state, request) = start(ConverterState::default());
        let state = reduce(state, fail(request));
        assert_eq!(state.result.as_str(), Some(ERROR_TEXT));
        assert_eq!(state.rate, None);
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[test]
    fn failure_after_success_clears_rate() {
        let (state, request) = start(ConverterState::default());
        let state = reduce(state, succeed(request, 83.0));
        let (state, request) = start(state);
        let state = reduce(state, fail(request));
        assert_eq!(state.rate, None);
        assert_eq!(state.result, ResultText::Error);
    }

    #[test]
    fn result_uses_amount_captured_at_trigger() {
        let (state, request) = start(with_inputs("USD", "INR", "2"));
        let state = reduce(state, Event::SetAmount("100".into()));
        let state = reduce(state, succeed(request, 10.0));
        assert_eq!(state.result.as_str(), Some("20.0000"));
        assert_eq!(state.amount, "100");
    }

    #[test]
    fn toggle_theme_touches_nothing_else() {
        let (state, request) = start(with_inputs("EUR", "JPY", "7"));
        let before = reduce(state, succeed(request, 160.5));
        let after = reduce(before.clone(), Event::ToggleTheme);
        assert!(after.dark);
        assert_eq!(ConverterState { dark: false, ..after.clone() }, before);

        let back = reduce(after, Event::ToggleTheme);
        assert_eq!(back, before);
    }

    #[test]
    fn theme_can_toggle_while_loading() {
        let (state, _) = start(ConverterState::default());
        let state = reduce(state, Event::ToggleTheme);
        assert!(state.loading);
        assert!(state.dark);
    }

    #[test]
    fn selection_rejects_codes_outside_catalog() {
        let state = reduce(ConverterState::default(), Event::SetSource("XYZ".into()));
        assert_eq!(state.source, "USD");
        let state = reduce(state, Event::SetTarget("eur".into()));
        assert_eq!(state.target, "INR");
    }

    #[test]
    fn selection_does_not_fetch_or_clear_result() {
        let (state, request) = start(ConverterState::default());
        let state = reduce(state, succeed(request, 83.0));
        let seq = state.next_seq;
        let state = reduce(state, Event::SetTarget("EUR".into()));
        let state = reduce(state, Event::SetAmount("5".into()));
        assert_eq!(state.next_seq, seq);
        assert!(!state.loading);
        assert_eq!(state.result.as_str(), Some("83.0000"));
    }

    #[test]
    fn swap_exchanges_codes() {
        let state = reduce(with_inputs("GBP", "JPY", "1"), Event::SwapCurrencies);
        assert_eq!(state.source, "JPY");
        assert_eq!(state.target, "GBP");
        assert!(!state.loading);
    }

    #[test]
    fn sequenced_discards_stale_response() {
        let (state, first) = start(with_inputs("USD", "INR", "1"));
        let (state, second) = start(reduce(state, Event::SetTarget("EUR".into())));

        // second resolves first
        let state = reduce(state, succeed(second, 0.9));
        assert_eq!(state.result.as_str(), Some("0.9000"));
        assert!(!state.loading);

        let state = reduce(state, succeed(first, 83.0));
        assert_eq!(state.result.as_str(), Some("0.9000"));
        assert_eq!(state.rate, Some(0.9));
    }

    #[test]
    fn sequenced_stays_loading_until_latest_settles() {
        let (state, first) = start(ConverterState::default());
        let (state, second) = start(state);
        let state = reduce(state, fail(first));
        assert!(state.loading);
        assert_eq!(state.result, ResultText::Empty);
        let state = reduce(state, succeed(second, 2.0));
        assert!(!state.loading);
    }

    #[test]
    fn legacy_failure_keeps_previous_rate() {
        let state = ConverterState::new("USD", "INR", CompletionOrder::Legacy);
        let (state, request) = start(state);
        let state = reduce(state, succeed(request, 83.0));
        let (state, request) = start(state);
        let state = reduce(state, fail(request));
        assert_eq!(state.result, ResultText::Error);
        assert_eq!(state.rate, Some(83.0));
        assert_eq!(state.updated_unix, Some(1_760_659_351));
        assert!(!state.loading);
    }

    #[test]
    fn legacy_missing_rate_clears_previous_rate() {
        let state = ConverterState::new("USD", "INR", CompletionOrder::Legacy);
        let (state, request) = start(state);
        let state = reduce(state, succeed(request, 83.0));
        let (state, request) = start(state);
        let state = reduce(state, fail_missing(request));
        assert_eq!(state.result, ResultText::Error);
        assert_eq!(state.rate, None);
    }

    #[test]
    fn legacy_last_resolution_wins() {
        let state = ConverterState::new("USD", "INR", CompletionOrder::Legacy);
        let (state, first) = start(state);
        let (state, second) = start(reduce(state, Event::SetTarget("EUR".into())));

        let state = reduce(state, succeed(second, 0.9));
        let state = reduce(state, succeed(first, 83.0));
        assert_eq!(state.result.as_str(), Some("83.0000"));
        assert_eq!(state.rate, Some(83.0));
        assert!(!state.loading);
    }
}
