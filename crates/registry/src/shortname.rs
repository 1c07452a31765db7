// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Camel-case tokenization for derived agent short names.

/// Derive the short form of an agent name.
///
/// Segments start at index 0 and at every ASCII uppercase letter; the short
/// name is the upper-cased first character of each segment. Computed at read
/// time, never stored.
///
/// `"firstAgentName"` → `"FAN"`, `"agent"` → `"A"`, `"ABCTest"` → `"ABCT"`.
pub fn short_name(agent_name: &str) -> String {
    agent_name
        .chars()
        .enumerate()
        .filter(|(i, c)| *i == 0 || c.is_ascii_uppercase())
        .map(|(_, c)| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
#[path = "shortname_tests.rs"]
mod tests;
