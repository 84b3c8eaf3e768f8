use account_ledger::config::Config;
use account_ledger::ledger::{AccountStore, LedgerService, Money};
use account_ledger::run::run;
use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;

pub fn bench_replay_7000_lines(c: &mut Criterion) {
    c.bench_function("replay_large_file_7_000", |b| {
        let data = format!(
            "op,account,to,amount\ncreate,,,100\ncreate,,,100\n{}",
            r#"deposit,    1,   ,  1.0
        deposit,    2,   ,  2.0
        badly formated record
        transfer,   1,  2,  2.0
        withdraw,   1,   ,  1.5
        withdraw,   2,   ,  3.0
        another bad record
"#
            .repeat(1_000)
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink(), &Config::default()))
    });
}

pub fn bench_replay_7000_lines_4_workers(c: &mut Criterion) {
    c.bench_function("replay_large_file_7_000_4_workers", |b| {
        let data = format!(
            "op,account,to,amount\ncreate,,,100\ncreate,,,100\ncreate,,,100\ncreate,,,100\n{}",
            r#"transfer,   1,  2,  1.0
        transfer,   2,  1,  1.0
        transfer,   3,  4,  1.0
        transfer,   4,  3,  1.0
        deposit,    1,   ,  0.5
        withdraw,   3,   ,  0.5
        get,        2,   ,
"#
            .repeat(1_000)
        );
        let cursor = std::io::Cursor::new(data);
        let config = Config {
            workers: 4,
            ..Config::default()
        };

        b.iter(move || run(cursor.clone(), std::io::sink(), &config))
    });
}

pub fn bench_opposite_transfers(c: &mut Criterion) {
    c.bench_function("opposite_transfers_2_threads_10_000", |b| {
        b.iter(|| {
            let service = LedgerService::new(AccountStore::new(), Money::ZERO);
            let a = service.create(Some(dec!(1000))).unwrap();
            let z = service.create(Some(dec!(1000))).unwrap();

            std::thread::scope(|s| {
                let service = &service;
                s.spawn(move || {
                    for _ in 0..5_000 {
                        let _ = service.transfer(a.id, z.id, dec!(1));
                    }
                });
                s.spawn(move || {
                    for _ in 0..5_000 {
                        let _ = service.transfer(z.id, a.id, dec!(1));
                    }
                });
            });
        })
    });
}

criterion_group!(
    benches,
    bench_replay_7000_lines,
    bench_replay_7000_lines_4_workers,
    bench_opposite_transfers,
);
criterion_main!(benches);
