use ahash::AHashMap;
use cozy_chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use search::{create_engine, EngineConfig, Strategy};
use uci::commands::GoParams;

const DEPTH: u8 = 2;
const NODES: u64 = 1000;
const SAMPLE_SIZE: usize = 10;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn bench_strategy(c: &mut Criterion, strategy: Strategy) {
    let mut config = EngineConfig::default();
    config.strategy.value = strategy;
    let mut engine = create_engine(&config);

    let mut group = c.benchmark_group(format!("search/{}", strategy));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    let params = GoParams {
        depth: Some(DEPTH),
        nodes: Some(NODES),
    };

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
            b.iter(|| {
                engine.new_game();
                engine.set_position(board.clone(), AHashMap::new());
                black_box(engine.search(&params, None))
            })
        });
    }

    group.finish();
}

fn bench_positions(c: &mut Criterion) {
    bench_strategy(c, Strategy::BestFirst);
    bench_strategy(c, Strategy::Negamax);
    bench_strategy(c, Strategy::Greedy);
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
