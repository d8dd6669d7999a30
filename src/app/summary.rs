use crate::metrics::LatencySummary;

/// How far an aborted run got.
pub(crate) struct AbortNote {
    pub(crate) completed: u64,
    /// Known up front for uploads; downloads stream the manifest.
    pub(crate) expected: Option<u64>,
}

pub(crate) fn summary_lines(summary: &LatencySummary, abort: Option<&AbortNote>) -> Vec<String> {
    let mut lines = vec![summary.to_string()];
    if let Some(note) = abort {
        let line = match note.expected {
            Some(expected) => format!("aborted after {} of {} files", note.completed, expected),
            None => format!("aborted after {} files", note.completed),
        };
        lines.push(line);
    }
    lines
}

pub(crate) fn print_summary(summary: &LatencySummary, abort: Option<&AbortNote>) {
    for line in summary_lines(summary, abort) {
        println!("{}", line);
    }
}
