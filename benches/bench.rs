use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::{Order, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> i32 {
    2i32.pow(num_levels) - 1
}

/// Builds a tree by inserting keys in ascending order. Without self-balancing this would be
/// a chain, so it exercises the rotations.
fn get_inserted_tree(num_levels: u32) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x);
    }

    tree
}

/// Builds a perfectly balanced tree straight from its keys.
fn get_built_tree(num_levels: u32) -> Tree<i32> {
    Tree::from_keys(0..num_nodes_in_full_tree(num_levels))
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("inserted", get_inserted_tree(num_levels)),
            ("built", get_built_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// Test BSTs. All tests are run against built and inserted trees of various sizes and test
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "traverse", |tree, _| {
        let _keys = black_box(tree.keys(Order::Level));
    });

    let mut group = c.benchmark_group("from_keys");
    for num_levels in [3, 7, 11, 15] {
        let n = num_nodes_in_full_tree(num_levels);
        let keys = (0..n).rev().collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::new("descending", n), &keys, |b, keys| {
            b.iter(|| Tree::from_keys(keys.iter().copied()))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
