//! Tests for the JS-facing API. Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use graph_search_wasm::bindings::grid_breadth_first_js;
use graph_search_wasm::bindings::islands::{count_islands_js, island_sizes_js};
use graph_search_wasm::bindings::topk::top_k_frequent_js;
use graph_search_wasm::Graph;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn sample() -> Graph {
    Graph::undirected([
        ("1", "2"),
        ("1", "3"),
        ("2", "4"),
        ("2", "5"),
        ("3", "6"),
        ("4", "5"),
    ])
}

fn strings(array: js_sys::Array) -> Vec<String> {
    array.iter().filter_map(|v| v.as_string()).collect()
}

#[wasm_bindgen_test]
fn breadth_first_returns_ids() {
    let g = sample();
    let order = strings(g.breadth_first_js("1").unwrap());
    assert_eq!(order, vec!["1", "2", "3", "4", "5", "6"]);
}

#[wasm_bindgen_test]
fn depth_first_strategies() {
    let g = sample();
    let rec = strings(g.depth_first_js("1", Some("recursive".into())).unwrap());
    assert_eq!(rec, vec!["1", "2", "4", "5", "3", "6"]);
    let it = strings(g.depth_first_js("1", None).unwrap());
    assert_eq!(it, vec!["1", "3", "6", "2", "5", "4"]);
    assert!(g.depth_first_js("1", Some("sideways".into())).is_err());
}

#[wasm_bindgen_test]
fn unknown_start_is_error() {
    let g = sample();
    assert!(g.breadth_first_js("nope").is_err());
    assert!(g.shortest_path_length_js("nope", "1").is_err());
}

#[wasm_bindgen_test]
fn shortest_path_length_sentinels() {
    let g = sample();
    assert_eq!(g.shortest_path_length_js("1", "5").unwrap(), 2);
    assert_eq!(g.shortest_path_length_js("3", "3").unwrap(), 0);
    assert_eq!(g.shortest_path_length_js("1", "missing").unwrap(), -1);
}

#[wasm_bindgen_test]
fn shortest_path_length_is_a_js_number() {
    let mut g = sample();
    g.add_node("lonely");
    let far = JsValue::from(g.shortest_path_length_js("6", "5").unwrap());
    assert_eq!(far.as_f64(), Some(4.0));
    let none = JsValue::from(g.shortest_path_length_js("1", "lonely").unwrap());
    assert_eq!(none.as_f64(), Some(-1.0));
}

#[wasm_bindgen_test]
fn connected_components_returns_ids() {
    let mut g = sample();
    g.add_node("lonely");
    let components: Vec<Vec<String>> = g
        .connected_components_js()
        .iter()
        .map(|c| strings(c.into()))
        .collect();
    assert_eq!(
        components,
        vec![vec!["1", "2", "3", "4", "5", "6"], vec!["lonely"]]
    );
}

#[wasm_bindgen_test]
fn from_adjacency_object() {
    let value = serde_wasm_bindgen::to_value(&serde_json::json!({
        "a": ["b"],
        "b": ["a", "c"],
        "c": ["b"]
    }))
    .unwrap();
    let g = Graph::from_adjacency_js(value).unwrap();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.shortest_path_length_js("a", "c").unwrap(), 2);
}

#[wasm_bindgen_test]
fn count_islands_from_strings() {
    let grid = serde_wasm_bindgen::to_value(&vec![
        vec!["1", "1", "0", "0", "0"],
        vec!["1", "1", "0", "0", "0"],
        vec!["0", "0", "1", "0", "0"],
        vec!["0", "0", "0", "1", "1"],
    ])
    .unwrap();
    assert_eq!(count_islands_js(grid.clone(), None).unwrap(), 3);
    assert_eq!(
        count_islands_js(grid.clone(), Some("breadth-first".into())).unwrap(),
        3
    );
    assert_eq!(island_sizes_js(grid, None).unwrap(), vec![4, 1, 2]);
}

#[wasm_bindgen_test]
fn ragged_grid_is_error() {
    let grid = serde_wasm_bindgen::to_value(&vec![vec![1, 0], vec![1]]).unwrap();
    assert!(count_islands_js(grid, None).is_err());
}

#[wasm_bindgen_test]
fn grid_breadth_first_default_marker() {
    let grid = serde_wasm_bindgen::to_value(&vec![vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
    let cells = grid_breadth_first_js(grid, 0, 0, JsValue::UNDEFINED).unwrap();
    let cells: Vec<(usize, usize)> = serde_wasm_bindgen::from_value(cells).unwrap();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
}

#[wasm_bindgen_test]
fn top_k_frequent_numbers() {
    let values = serde_wasm_bindgen::to_value(&vec![1, 1, 1, 2, 2, 3]).unwrap();
    let top = top_k_frequent_js(values.clone(), 2, Some("bucket".into())).unwrap();
    let top: Vec<i64> = serde_wasm_bindgen::from_value(top).unwrap();
    assert_eq!(top, vec![1, 2]);

    assert!(top_k_frequent_js(values.clone(), 0, None).is_err());
    assert!(top_k_frequent_js(values, -3, None).is_err());
}
