//! Lazy row iteration over one decoded csv stream.

use std::io::Read;

/// A single-pass iterator over the rows of a decoded batch file. The header
/// is read once at construction; rows are yielded in file order as string
/// records aligned to that header. Rows with a differing field count are
/// errors. Sentinel strings pass through untouched.
pub struct RecordIter<R: Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> RecordIter<R> {
    pub fn new(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);
        let headers = reader.headers()?.iter().map(|h| h.to_string()).collect();
        Ok(RecordIter {
            headers,
            records: reader.into_records(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<csv::StringRecord, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_rows_aligned_to_the_header() {
        let mut iter = RecordIter::new("id,name\n1,alice\n2,bob\n".as_bytes()).unwrap();
        assert_eq!(iter.headers(), ["id", "name"]);

        let row = iter.next().unwrap().unwrap();
        assert_eq!(row.get(0), Some("1"));
        assert_eq!(row.get(1), Some("alice"));
        let row = iter.next().unwrap().unwrap();
        assert_eq!(row.get(1), Some("bob"));
        assert!(iter.next().is_none());
    }

    #[test]
    fn short_rows_are_errors() {
        let mut iter = RecordIter::new("id,name\n1\n".as_bytes()).unwrap();
        assert!(iter.next().unwrap().is_err());
    }

    #[test]
    fn empty_and_quoted_cells_are_preserved() {
        let mut iter =
            RecordIter::new("id,note\n1,\"a, quoted\"\n2,\n".as_bytes()).unwrap();
        let row = iter.next().unwrap().unwrap();
        assert_eq!(row.get(1), Some("a, quoted"));
        // An empty cell is an empty string, distinct from any sentinel.
        let row = iter.next().unwrap().unwrap();
        assert_eq!(row.get(1), Some(""));
    }
}
