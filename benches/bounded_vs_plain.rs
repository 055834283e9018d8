use std::cell::Cell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use limiti::counters::clamping::ClampingCounter;
use limiti::counters::wrapping::WrappingCounter;
use limiti::counters::BoundedCounter;
use limiti::listeners::{Listener, MultiSubscriber};

const ITERATIONS: usize = 1_000_000;
const UPPER: i64 = 1_000;

fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_increment");

    group.bench_function(
        BenchmarkId::new("Cell<i64> (unbounded)", format!("{}iter", ITERATIONS)),
        |b| {
            b.iter(|| {
                let counter = Cell::new(0i64);
                for _ in 0..ITERATIONS {
                    counter.set(counter.get() + 1);
                }
                black_box(counter.get())
            })
        },
    );

    group.bench_function(
        BenchmarkId::new("ClampingCounter (no listeners)", format!("{}iter", ITERATIONS)),
        |b| {
            b.iter(|| {
                let counter = ClampingCounter::new(0, UPPER).unwrap();
                for _ in 0..ITERATIONS {
                    counter.increment();
                }
                black_box(counter.value())
            })
        },
    );

    group.bench_function(
        BenchmarkId::new("WrappingCounter (one listener)", format!("{}iter", ITERATIONS)),
        |b| {
            let hits = Rc::new(Cell::new(0usize));
            let listener: Rc<dyn Listener> = {
                let hits = Rc::clone(&hits);
                Rc::new(move |_: &dyn BoundedCounter| hits.set(hits.get() + 1))
            };
            b.iter(|| {
                let counter = WrappingCounter::new(0, UPPER).unwrap();
                counter.subscribe(Rc::downgrade(&listener));
                for _ in 0..ITERATIONS {
                    counter.increment();
                }
                black_box(counter.value())
            })
        },
    );

    group.bench_function(
        BenchmarkId::new("ClampingCounter (saturated, MultiSubscriber)", "1000iter"),
        |b| {
            b.iter(|| {
                let counter = ClampingCounter::new(UPPER, UPPER).unwrap();
                let subscriber = MultiSubscriber::new("bench");
                subscriber.subscribe_to(&counter);
                for _ in 0..1_000 {
                    counter.increment();
                }
                black_box(subscriber.take_reports().len())
            })
        },
    );

    group.finish();
}

criterion_group!(benches, bench_increment);
criterion_main!(benches);
