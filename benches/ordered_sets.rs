use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.gen::<i32>());
            }
        })
    });
}

macro_rules! ordered_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_trees::{$type_name, OrderedSet};
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set = set.insert(rng.gen::<i32>());
                        }
                        set
                    }));
                }

                pub fn bench_find(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let value = rng.gen::<i32>();
                        set = set.insert(value);
                        values.push(value);
                    }

                    c.bench_function(&format!("bench {} find", stringify!($module_name)), move |b| b.iter(|| {
                        for value in &values {
                            black_box(set.find(*value));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), |b| b.iter(|| {
                        let mut set: $type_name = (0..NUM_OF_OPERATIONS as i32).collect();
                        for value in 0..NUM_OF_OPERATIONS as i32 {
                            set = set.remove(value);
                        }
                        set
                    }));
                }
            }
        )*
    }
}

ordered_set_benches!(
    bst: BstSet,
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

fn bench_black_box_dump(c: &mut Criterion) {
    use balanced_trees::{AvlSet, Order, OrderedSet};

    let set: AvlSet = (0..1000).collect();
    c.bench_function("bench avl_tree dump", move |b| {
        b.iter(|| black_box(set.dump(Order::Descending).sum::<i32>()))
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_black_box_dump,
    bst::bench_insert,
    bst::bench_find,
    bst::bench_remove,
    avl_tree::bench_insert,
    avl_tree::bench_find,
    avl_tree::bench_remove,
    red_black_tree::bench_insert,
    red_black_tree::bench_find,
    red_black_tree::bench_remove,
);
criterion_main!(benches);
