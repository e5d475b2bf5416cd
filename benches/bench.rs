use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segdeque::SegDeque;
use std::collections::VecDeque;

fn bench_push_and_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back and pop_front 1001");
    group.bench_function("SegDeque", |b| {
        b.iter(|| {
            let mut deque = SegDeque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.finish();
}

fn bench_push_both_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front and push_back 1000");
    group.bench_function("SegDeque", |b| {
        b.iter(|| {
            let mut deque = SegDeque::new();
            for i in 0..500 {
                deque.push_front(black_box(i));
                deque.push_back(black_box(i));
            }
            deque
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..500 {
                deque.push_front(black_box(i));
                deque.push_back(black_box(i));
            }
            deque
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get 1001");
    let seg = (0..1001).collect::<SegDeque<_>>();
    let vec = (0..1001).collect::<VecDeque<_>>();
    group.bench_function("SegDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = seg.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = vec.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter 1001");
    let seg = (0..1001).collect::<SegDeque<u64>>();
    let vec = (0..1001).collect::<VecDeque<u64>>();
    group.bench_function("SegDeque", |b| b.iter(|| black_box(&seg).iter().sum::<u64>()));
    group.bench_function("VecDeque", |b| b.iter(|| black_box(&vec).iter().sum::<u64>()));
    group.finish();
}

criterion_group!(benches, bench_push_and_pop, bench_push_both_ends, bench_get, bench_iter);
criterion_main!(benches);
