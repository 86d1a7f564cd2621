use serde::ser::{Serialize, SerializeMap, Serializer};

/// Header plus rows produced by a list command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: &[&'static str]) -> Self {
        Self {
            header: header.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Tab-delimited form: header, one line per row, then a blank line.
    pub fn to_tsv(&self) -> String {
        let mut out = self.header.join("\t");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl Extend<Vec<String>> for Table {
    fn extend<I: IntoIterator<Item = Vec<String>>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

/// Serialises as an array of objects keyed by header names.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|row| Record {
            header: &self.header,
            row,
        }))
    }
}

struct Record<'a> {
    header: &'a [&'static str],
    row: &'a [String],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.header.len()))?;
        for (i, key) in self.header.iter().enumerate() {
            map.serialize_entry(key, self.row.get(i).map(String::as_str).unwrap_or(""))?;
        }
        map.end()
    }
}
