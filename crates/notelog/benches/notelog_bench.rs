use chrono::{FixedOffset, TimeZone};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use notelog::{Entry, LogWriter, ReverseReader};

const NOTE: &str = "彼女の速いコースをスピードアップするためのより良い波
私の天才の軽い樹皮が帆を持ち上げ、
とても残酷な海を後に残してください。";
const TAG: &str = "セントヴィンセントおよびグレナディーン諸島";
const N_ENTRIES: usize = 1_000;

fn some_entry() -> Entry {
    let created_at = FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(1_258_490_098, 651_387_237)
        .unwrap();
    Entry::new(NOTE, vec![TAG.to_string(); 5], created_at)
}

fn build_log(count: usize) -> Vec<u8> {
    let entry = some_entry();
    let mut w = LogWriter::new(Vec::new());
    for _ in 0..count {
        w.append(&entry).unwrap();
    }
    w.into_inner()
}

fn append_benchmark(c: &mut Criterion) {
    let entry = some_entry();
    c.bench_function("append_single_entry", |b| {
        b.iter_batched(
            || LogWriter::new(Vec::with_capacity(1024)),
            |mut w| {
                w.append(&entry).unwrap();
                w
            },
            BatchSize::SmallInput,
        );
    });
}

fn read_newest_benchmark(c: &mut Criterion) {
    let log = build_log(N_ENTRIES);
    c.bench_function("reverse_read_newest_of_1k", |b| {
        b.iter_batched(
            || ReverseReader::from_bytes(log.clone()),
            |mut r| r.read_entry().unwrap().unwrap(),
            BatchSize::LargeInput,
        );
    });
}

fn read_all_benchmark(c: &mut Criterion) {
    let log = build_log(N_ENTRIES);
    c.bench_function("reverse_read_all_1k", |b| {
        b.iter_batched(
            || ReverseReader::from_bytes(log.clone()),
            |r| {
                let n = r.map(|e| e.unwrap()).count();
                assert_eq!(n, N_ENTRIES);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    append_benchmark,
    read_newest_benchmark,
    read_all_benchmark
);
criterion_main!(benches);
