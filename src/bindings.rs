//! WASM entry points for grid and frequency algorithms.
//!
//! Graph traversals are methods on `Graph`; everything that works on plain
//! arrays lives here as free functions.

use crate::algorithms::grid_search::grid_breadth_first;
use crate::error::Result;
use crate::grid::Grid;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn grid_from_js<T: DeserializeOwned>(value: JsValue) -> Result<Grid<T>> {
    Grid::from_rows(from_js(value)?)
}

/// Breadth-first search over a 2-D array.
///
/// A neighbour is passable when it equals `marker` (default `1`). Returns
/// `[row, col][]` in visit order, starting with the start cell.
#[wasm_bindgen(js_name = gridBreadthFirst)]
pub fn grid_breadth_first_js(
    grid: JsValue,
    start_row: usize,
    start_col: usize,
    marker: JsValue,
) -> std::result::Result<JsValue, JsError> {
    let grid: Grid<Value> = grid_from_js(grid)?;
    let marker = if marker.is_undefined() || marker.is_null() {
        Value::from(1)
    } else {
        from_js(marker)?
    };
    let cells = grid_breadth_first(&grid, start_row, start_col, |cell| *cell == marker)?;
    Ok(serde_wasm_bindgen::to_value(&cells)?)
}

#[cfg(feature = "islands")]
pub mod islands {
    use super::*;
    use crate::algorithms::islands::{count_islands, island_sizes};
    use crate::grid::Terrain;
    use crate::strategy::{parse_or_default, FloodFill};

    /// Count islands in a grid of "1"/"0" (or 1/0, true/false) cells.
    /// `strategy` is "depth-first" (default) or "breadth-first". The input is not modified.
    #[wasm_bindgen(js_name = countIslands)]
    pub fn count_islands_js(
        grid: JsValue,
        strategy: Option<String>,
    ) -> std::result::Result<usize, JsError> {
        let grid: Grid<Terrain> = grid_from_js(grid)?;
        let strategy: FloodFill = parse_or_default(strategy)?;
        Ok(count_islands(&grid, strategy))
    }

    /// Size of each island, in row-major discovery order.
    #[wasm_bindgen(js_name = islandSizes)]
    pub fn island_sizes_js(
        grid: JsValue,
        strategy: Option<String>,
    ) -> std::result::Result<Vec<usize>, JsError> {
        let grid: Grid<Terrain> = grid_from_js(grid)?;
        let strategy: FloodFill = parse_or_default(strategy)?;
        Ok(island_sizes(&grid, strategy))
    }
}

#[cfg(feature = "topk")]
pub mod topk {
    use super::*;
    use crate::algorithms::topk::{frequencies, top_k_frequent};
    use crate::error::SearchError;
    use crate::strategy::{parse_or_default, Selection};
    use serde::{Deserialize, Serialize};

    /// A hashable JS value: integer, string or boolean.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(untagged)]
    enum Key {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    #[derive(Serialize)]
    struct FrequencyEntry {
        value: Key,
        count: usize,
    }

    /// The k most frequent values, most frequent first, ties in first-seen order.
    /// `strategy` is "heap" (default) or "bucket".
    #[wasm_bindgen(js_name = topKFrequent)]
    pub fn top_k_frequent_js(
        values: JsValue,
        k: i32,
        strategy: Option<String>,
    ) -> std::result::Result<JsValue, JsError> {
        if k <= 0 {
            let err = SearchError::invalid_argument(format!("k must be positive, got {k}"));
            return Err(err.into());
        }
        let values: Vec<Key> = from_js(values)?;
        let strategy: Selection = parse_or_default(strategy)?;
        let top = top_k_frequent(&values, k as usize, strategy)?;
        Ok(serde_wasm_bindgen::to_value(&top)?)
    }

    /// `{ value, count }[]` in first-seen order.
    #[wasm_bindgen(js_name = frequencies)]
    pub fn frequencies_js(values: JsValue) -> std::result::Result<JsValue, JsError> {
        let values: Vec<Key> = from_js(values)?;
        let table: Vec<FrequencyEntry> = frequencies(&values)
            .into_iter()
            .map(|(value, count)| FrequencyEntry { value, count })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&table)?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_key_untagged() {
            let keys: Vec<Key> = serde_json::from_str(r#"[1, "1", true, -4]"#).unwrap();
            assert_eq!(
                keys,
                vec![
                    Key::Int(1),
                    Key::Str("1".to_string()),
                    Key::Bool(true),
                    Key::Int(-4)
                ]
            );
            // Number and string with the same text stay distinct
            let top = top_k_frequent(&keys, 4, Selection::Bucket).unwrap();
            assert_eq!(top.len(), 4);
        }
    }
}
