//! Shared rendering helpers for command output.

use console::style;

/// Render a checklist marker.
pub fn checkbox(done: bool) -> String {
    if done {
        style("[x]").green().to_string()
    } else {
        style("[ ]").dim().to_string()
    }
}

/// Render a section heading.
pub fn heading(text: &str) -> String {
    style(text).bold().to_string()
}

/// Render a fixed-width progress bar for a (possibly >100) percentage.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = ((percent.min(100) as usize) * width) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(progress_bar(0, 10), "[----------] 0%");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(progress_bar(100, 10), "[##########] 100%");
    }

    #[test]
    fn progress_bar_floors_partial_fill() {
        assert_eq!(progress_bar(50, 10), "[#####-----] 50%");
        assert_eq!(progress_bar(11, 10), "[#---------] 11%");
    }

    #[test]
    fn progress_bar_over_100_fills_but_reports_true_percent() {
        assert_eq!(progress_bar(106, 10), "[##########] 106%");
    }

    #[test]
    fn checkbox_markers() {
        assert!(checkbox(true).contains("[x]"));
        assert!(checkbox(false).contains("[ ]"));
    }
}
