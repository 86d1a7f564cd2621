const COLUMN_GAP: usize = 2;

/// Realign tab-separated lines into space-padded columns.
///
/// Each column is as wide as its widest field over all lines. The last
/// field of a line is never padded and blank lines are kept as they are.
pub fn align_columns(input: &str) -> String {
    let rows: Vec<Vec<&str>> = input
        .lines()
        .map(|line| {
            if line.is_empty() {
                Vec::new()
            } else {
                line.split('\t').collect()
            }
        })
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &rows {
        for (i, field) in row.iter().enumerate() {
            let width = field.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }

    let mut out = String::with_capacity(input.len());
    for row in &rows {
        let last = row.len().saturating_sub(1);
        for (i, field) in row.iter().enumerate() {
            out.push_str(field);
            if i < last {
                let pad = widths[i] - field.chars().count() + COLUMN_GAP;
                out.extend(std::iter::repeat(' ').take(pad));
            }
        }
        out.push('\n');
    }
    out
}
