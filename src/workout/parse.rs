//! Best-effort parsing of combined "sets x reps" text.
//!
//! The reference catalog writes prescriptions as a single string: `"4 x 8"`,
//! `"3 x 45 sec"`, `"2 x 30 min"`, `"1 x Max"`. Splitting that into separate
//! sets/reps fields is best-effort: anything that does not match the pattern
//! yields empty fields rather than an error, so one odd row never fails a
//! whole batch.

use std::sync::LazyLock;

use regex::Regex;

use super::entry::ExerciseDraft;

static SETS_REPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*[xX×]\s*((?:\d+(?:\s*(?:sec|secs|min|mins))?|[Mm]ax))\s*$").unwrap()
});

/// Split `"<N> x <M | Max | <M> sec | <M> min>"` into `(sets, reps)`.
///
/// Unparseable text yields two empty strings.
pub fn split_sets_reps(text: &str) -> (String, String) {
    match SETS_REPS.captures(text) {
        Some(caps) => {
            let sets = caps[1].to_string();
            let reps = caps[2].split_whitespace().collect::<Vec<_>>().join(" ");
            (sets, reps)
        }
        None => (String::new(), String::new()),
    }
}

/// Build a transient draft pre-populated from a catalog prescription.
///
/// This touches no store state; the draft persists only when explicitly
/// added to the log.
pub fn prefill_exercise(name: &str, sets_reps_text: &str) -> ExerciseDraft {
    let (sets, reps) = split_sets_reps(sets_reps_text);
    ExerciseDraft {
        name: name.to_string(),
        sets,
        reps,
        ..Default::default()
    }
}
