use criterion::{criterion_group, criterion_main, Criterion};
use mazeball::{
    build_queue::BuildQueue,
    coordinates::Size,
    generators::{Algorithm, RngSource},
    grid_builder::build_grid,
    placement::{GroundRegion, WallDimensions},
    units::{WallHeight, WallThickness},
    visitor::CellsVisitor,
};
use rand::{rngs::SmallRng, SeedableRng};

fn visitor_32() -> CellsVisitor {
    let size = Size::new(32, 32).unwrap();
    let dimensions = WallDimensions::new(WallThickness(0.3), WallHeight(0.5)).unwrap();
    let grid = build_grid(size, &GroundRegion::for_size(size), dimensions, BuildQueue::new())
        .unwrap();
    CellsVisitor::new(grid)
}

fn bench_algorithm_32(c: &mut Criterion, algorithm: Algorithm) {
    let mut v = visitor_32();
    let queue = v.grid().build_queue().clone();
    let mut generator = algorithm.generator();
    let mut source = RngSource(SmallRng::seed_from_u64(32));

    c.bench_function(&format!("{}_maze_32", algorithm), move |b| {
        b.iter(|| {
            generator.generate(&mut v, &mut source).unwrap();
            queue.drain()
        })
    });
}

fn bench_frontier_growth_maze_32(c: &mut Criterion) {
    bench_algorithm_32(c, Algorithm::FrontierGrowth);
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    bench_algorithm_32(c, Algorithm::RecursiveBacktracker);
}

fn bench_union_find_maze_32(c: &mut Criterion) {
    bench_algorithm_32(c, Algorithm::UnionFind);
}

criterion_group!(
    benches,
    bench_frontier_growth_maze_32,
    bench_recursive_backtracker_maze_32,
    bench_union_find_maze_32
);
criterion_main!(benches);
