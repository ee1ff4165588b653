use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_core::{InventoryEntity, ItemId, Quantity, Repository, SharedRepository};

#[derive(Debug, Clone)]
struct BenchItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
}

impl InventoryEntity for BenchItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

fn item(id: i64) -> BenchItem {
    BenchItem {
        id: ItemId::new(id),
        name: format!("Item {id}"),
        quantity: Quantity::ZERO,
    }
}

fn populated(size: i64) -> Repository<BenchItem> {
    let mut repo = Repository::new();
    for id in 0..size {
        repo.add(item(id)).unwrap();
    }
    repo
}

fn bench_add_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_add");

    for size in [10i64, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("fill", size), size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }

    group.finish();
}

fn bench_lookup_and_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_access");

    group.bench_function("get_by_id", |b| {
        let repo = populated(1000);
        b.iter(|| black_box(repo.get_by_id(ItemId::new(black_box(500))).unwrap().quantity()));
    });

    group.bench_function("update_quantity", |b| {
        let mut repo = populated(1000);
        b.iter(|| repo.update_quantity(ItemId::new(500), black_box(42)).unwrap());
    });

    group.bench_function("shared_adjust_quantity", |b| {
        let repo = SharedRepository::from_repository(populated(1000));
        b.iter(|| black_box(repo.adjust_quantity(ItemId::new(500), 1).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_add_throughput, bench_lookup_and_update);
criterion_main!(benches);
