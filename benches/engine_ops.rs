use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use twenty48::engine::{Board, Move};

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut boards = Vec::new();
    // Empty and two-tile starts
    boards.push(Board::empty(4));
    let mut b = Board::empty(4)
        .with_random_tile(&mut rng, 0.2)
        .unwrap()
        .with_random_tile(&mut rng, 0.2)
        .unwrap();
    boards.push(b.clone());
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..20 {
        let dir = seq[i % seq.len()];
        let nb = b.shift(dir);
        if nb != b {
            b = nb.with_random_tile(&mut rng, 0.2).unwrap();
        }
        boards.push(b.clone());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    for (name, dir) in [
        ("shift/left", Move::Left),
        ("shift/right", Move::Right),
        ("shift/up", Move::Up),
        ("shift/down", Move::Down),
    ] {
        c.bench_function(name, |bch| {
            let boards = corpus();
            bch.iter(|| {
                let mut acc = 0u32;
                for bd in &boards {
                    acc ^= bd.shift(dir).highest_tile();
                }
                black_box(acc)
            })
        });
    }
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("queries/has_lost", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut stuck = 0usize;
            for bd in &boards {
                if bd.has_lost() {
                    stuck += 1;
                }
            }
            black_box(stuck)
        })
    });
    c.bench_function("queries/count_empty", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut total = 0usize;
            for bd in &boards {
                total += bd.count_empty();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_shift, bench_queries);
criterion_main!(benches);
