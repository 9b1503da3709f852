use criterion::{Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;
use sweeper_core::*;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_mines");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let grid = Grid::new(config.rows(), config.cols());
        let mut rng = SmallRng::seed_from_u64(0);
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| {
                grid.place_mines(config, black_box((0, 0)), &mut rng)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn opening_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("opening_reveal");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let start = (config.rows() / 2, config.cols() / 2);
        let grid = Grid::new(config.rows(), config.cols())
            .place_mines(config, start, &mut SmallRng::seed_from_u64(1))
            .unwrap();
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| grid.reveal(black_box(start)).unwrap())
        });
    }
    group.finish();
}

fn mine_free_flood(c: &mut Criterion) {
    let grid = Grid::new(Coord::MAX, Coord::MAX);
    c.bench_function("mine_free_flood_255x255", |b| {
        b.iter(|| grid.reveal(black_box((127, 127))).unwrap())
    });
}

criterion_group!(benches, placement, opening_reveal, mine_free_flood);
criterion_main!(benches);
