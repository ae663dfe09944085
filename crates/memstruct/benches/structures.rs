use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memstruct::{BinarySearchTree, LinkedList};

fn bench_list_move_to_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("move_to_front_1k", |b| {
        let mut list = LinkedList::with_capacity(1000);
        let handles: Vec<_> = (0..1000u64).map(|i| list.add_to_head(i)).collect();

        let mut counter = 0;
        b.iter(|| {
            black_box(list.move_to_front(handles[counter % 1000]).ok());
            counter += 7;
        });
    });

    group.bench_function("add_head_remove_tail", |b| {
        let mut list = LinkedList::with_capacity(1000);
        for i in 0..1000u64 {
            list.add_to_head(i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            list.add_to_head(counter);
            black_box(list.remove_from_tail().ok());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("bst");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("contains_10k", |b| {
        // Multiplicative scramble keeps the tree reasonably balanced
        let tree: BinarySearchTree<u64> = (0..10_000u64).map(|i| (i * 7919) % 10_007).collect();

        let mut counter = 0u64;
        b.iter(|| {
            black_box(tree.contains(&(counter % 10_007)));
            counter += 1;
        });
    });

    group.bench_function("insert", |b| {
        let mut tree = BinarySearchTree::new();
        let mut counter = 0u64;
        b.iter(|| {
            tree.insert((counter * 7919) % 1_000_003);
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_list_move_to_front, bench_tree);
criterion_main!(benches);
