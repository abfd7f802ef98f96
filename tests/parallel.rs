use princesses::solver::{search_parallel, Searcher};

fn assert_split_matches_sequential<const N: usize>() {
    let sequential = Searcher::<N>::new(true).search();
    let parallel = search_parallel::<N>(true);
    assert_eq!(parallel.max_count, sequential.max_count, "count differs at N={N}");
    assert_eq!(parallel.best_board, sequential.best_board, "board differs at N={N}");
}

#[test]
fn root_split_matches_sequential_small() {
    assert_split_matches_sequential::<3>();
    assert_split_matches_sequential::<4>();
    assert_split_matches_sequential::<5>();
    assert_split_matches_sequential::<6>();
}

#[test]
fn root_split_matches_sequential_full_board() {
    assert_split_matches_sequential::<8>();
}

#[test]
fn root_split_without_capture_reports_count_only() {
    let result = search_parallel::<6>(false);
    assert_eq!(result.max_count, 8);
    assert_eq!(result.best_board, None);
}
