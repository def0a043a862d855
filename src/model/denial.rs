/// Illustrative NGS claim denial rates by state. Not payer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateDenialRate {
    pub state: &'static str,
    pub code: &'static str,
    pub denial_rate_pct: u8,
}

const STATE_DENIAL_RATES: &[StateDenialRate] = &[
    StateDenialRate {
        state: "California",
        code: "CA",
        denial_rate_pct: 12,
    },
    StateDenialRate {
        state: "Texas",
        code: "TX",
        denial_rate_pct: 18,
    },
    StateDenialRate {
        state: "Florida",
        code: "FL",
        denial_rate_pct: 15,
    },
    StateDenialRate {
        state: "New York",
        code: "NY",
        denial_rate_pct: 10,
    },
    StateDenialRate {
        state: "Illinois",
        code: "IL",
        denial_rate_pct: 17,
    },
    StateDenialRate {
        state: "Georgia",
        code: "GA",
        denial_rate_pct: 14,
    },
    StateDenialRate {
        state: "Pennsylvania",
        code: "PA",
        denial_rate_pct: 13,
    },
    StateDenialRate {
        state: "Ohio",
        code: "OH",
        denial_rate_pct: 16,
    },
    StateDenialRate {
        state: "North Carolina",
        code: "NC",
        denial_rate_pct: 11,
    },
    StateDenialRate {
        state: "Michigan",
        code: "MI",
        denial_rate_pct: 19,
    },
];

/// Matches a state by full name or two-letter code, ignoring case.
pub fn denial_rate(state: &str) -> Option<&'static StateDenialRate> {
    let key = state.trim();
    STATE_DENIAL_RATES
        .iter()
        .find(|s| s.state.eq_ignore_ascii_case(key) || s.code.eq_ignore_ascii_case(key))
}

/// Highest denial rate first; ties broken by state name.
pub fn ranked_by_denial() -> Vec<&'static StateDenialRate> {
    let mut rows = STATE_DENIAL_RATES.iter().collect::<Vec<_>>();
    rows.sort_by(|a, b| match b.denial_rate_pct.cmp(&a.denial_rate_pct) {
        std::cmp::Ordering::Equal => a.state.cmp(b.state),
        other => other,
    });
    rows
}
