use criterion::{criterion_group, criterion_main, Criterion};
use sl_list::data_structure::sl_list::SLList;
use sl_list::interface::list::List;

fn sl_list_bench(c: &mut Criterion) {
    c.bench_function("SLList push_back/remove head", |b| {
        b.iter(|| {
            let mut list = SLList::new();
            for i in 0..100 {
                list.push_back(i.to_string());
            }
            for _i in 0..100 {
                list.remove(0).ok();
            }
        })
    });

    c.bench_function("SLList add/get middle", |b| {
        b.iter(|| {
            let mut list = SLList::new();
            for i in 0..100 {
                list.add(list.size() / 2, i).ok();
            }
            let mut sum = 0;
            for i in 0..100 {
                sum += list.get(i).copied().unwrap_or(0);
            }
            sum
        })
    });
}

criterion_group!(benches, sl_list_bench);
criterion_main!(benches);
