/// Per-category record sequences collected during one pass over a log.
///
/// Categories keep the order in which they first appeared; records within a
/// category keep arrival order.
#[derive(Debug, Clone)]
pub struct Dataset<K, R> {
    categories: Vec<(K, Vec<R>)>,
    rejected: usize,
}

impl<K: Copy + PartialEq, R> Dataset<K, R> {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            rejected: 0,
        }
    }

    pub fn push(&mut self, key: K, record: R) {
        match self.categories.iter_mut().find(|(k, _)| *k == key) {
            Some((_, records)) => records.push(record),
            None => self.categories.push((key, vec![record])),
        }
    }

    pub fn reject(&mut self) {
        self.rejected += 1;
    }

    /// Records of one category; empty if the category never appeared.
    pub fn get(&self, key: K) -> &[R] {
        self.categories
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = (K, &[R])> + '_ {
        self.categories
            .iter()
            .map(|(k, records)| (*k, records.as_slice()))
    }

    pub fn accepted(&self) -> usize {
        self.categories.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<K: Copy + PartialEq, R> Default for Dataset<K, R> {
    fn default() -> Self {
        Self::new()
    }
}
