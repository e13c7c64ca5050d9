//! Result-set size guard
//!
//! A recursive walk rooted in the wrong place (a home directory, a tree
//! full of vendored dependencies) can take minutes. A cheap counting
//! pass runs first; past the threshold the user is asked before the
//! expensive ranking and preview work starts.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// File-count threshold above which confirmation is required
pub const DEFAULT_THRESHOLD: usize = 200_000;

/// Outcome of the guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Proceed,
    Abort,
}

/// Gate on the result-set size.
///
/// At or below the threshold the answer is always `Proceed` and
/// `confirm` is never invoked.
pub fn check<F>(count: usize, threshold: usize, confirm: F) -> Verdict
where
    F: FnOnce() -> bool,
{
    if count <= threshold {
        return Verdict::Proceed;
    }
    if confirm() {
        Verdict::Proceed
    } else {
        Verdict::Abort
    }
}

/// Interactive confirmation: warning on stderr, y/Y on stdin affirms.
pub fn confirm_via_prompt(count: usize) -> bool {
    eprintln!(
        "{} about to rank {} files; this may take a while.",
        "Warning:".yellow().bold(),
        count
    );
    eprint!("Continue? [y/N] ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proceeds_below_threshold_without_confirm() {
        let verdict = check(10, 100, || panic!("confirm must not run"));
        assert_eq!(verdict, Verdict::Proceed);
    }

    #[test]
    fn test_proceeds_at_threshold_without_confirm() {
        let verdict = check(100, 100, || panic!("confirm must not run"));
        assert_eq!(verdict, Verdict::Proceed);
    }

    #[test]
    fn test_aborts_above_threshold_on_decline() {
        assert_eq!(check(101, 100, || false), Verdict::Abort);
    }

    #[test]
    fn test_proceeds_above_threshold_on_affirm() {
        assert_eq!(check(101, 100, || true), Verdict::Proceed);
    }

    #[test]
    fn test_zero_threshold_gates_everything_nonzero() {
        assert_eq!(check(0, 0, || false), Verdict::Proceed);
        assert_eq!(check(1, 0, || false), Verdict::Abort);
    }
}
