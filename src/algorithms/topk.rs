//! Top-k most frequent values.
//!
//! Two selectors over the same frequency table:
//! - Heap: min-heap capped at k entries, O(N log k)
//! - Bucket: values grouped by count, scanned from the top, O(N)
//!
//! Results are ordered by descending count. Ties go to the value seen first
//! in the input, for both selectors, so they always agree.

use crate::error::{Result, SearchError};
use crate::strategy::Selection;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Count occurrences of each distinct value, in first-seen order.
pub fn frequencies<T>(values: &[T]) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let mut position: HashMap<&T, usize> = HashMap::new();
    let mut table: Vec<(T, usize)> = Vec::new();

    for v in values {
        match position.get(v) {
            Some(&i) => table[i].1 += 1,
            None => {
                position.insert(v, table.len());
                table.push((v.clone(), 1));
            }
        }
    }

    table
}

/// The `k` most frequent values of `values`.
///
/// Returns `min(k, distinct values)` items. Fails with `InvalidArgument`
/// when `k` is zero.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn top_k_frequent<T>(values: &[T], k: usize, strategy: Selection) -> Result<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    if k == 0 {
        return Err(SearchError::invalid_argument("k must be positive"));
    }

    let table = frequencies(values);
    let picked = match strategy {
        Selection::Heap => select_heap(&table, k),
        Selection::Bucket => select_bucket(&table, values.len(), k),
    };

    tracing::debug!(distinct = table.len(), returned = picked.len(), "top-k selected");
    Ok(picked.into_iter().map(|i| table[i].0.clone()).collect())
}

/// Indices into `table` of the k best entries, best first.
fn select_heap<T>(table: &[(T, usize)], k: usize) -> Vec<usize> {
    // Min-heap on (count, earlier-is-better rank): the root is the entry
    // that loses first, i.e. lowest count, latest seen among equal counts.
    let mut heap: BinaryHeap<Reverse<(usize, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k.min(table.len()) + 1);

    for (rank, (_, count)) in table.iter().enumerate() {
        heap.push(Reverse((*count, Reverse(rank))));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Ascending in Reverse order == best first
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((_, Reverse(rank)))| rank)
        .collect()
}

/// Indices into `table` of the k best entries, best first.
fn select_bucket<T>(table: &[(T, usize)], total: usize, k: usize) -> Vec<usize> {
    // buckets[c] = ranks of values seen exactly c times, in first-seen order
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); total + 1];
    for (rank, (_, count)) in table.iter().enumerate() {
        buckets[*count].push(rank);
    }

    let mut picked = Vec::with_capacity(k.min(table.len()));
    for bucket in buckets.iter().skip(1).rev() {
        for &rank in bucket {
            picked.push(rank);
            if picked.len() == k {
                return picked;
            }
        }
    }
    picked
}
