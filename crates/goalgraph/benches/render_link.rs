use criterion::{Criterion, criterion_group, criterion_main};
use goalgraph::link::encode_link;
use goalgraph::{Agent, Goal, IdAllocator, LinkOptions, Refinement, RefinementGraph, VertexId};
use std::hint::black_box;
use std::sync::Arc;

/// A complete tree of the given depth and fan-out; every leaf goal is performed by one shared
/// agent.
fn build_tree(depth: usize, fan_out: usize) -> (RefinementGraph, VertexId) {
    let mut g = RefinementGraph::with_allocator(Arc::new(IdAllocator::new()));
    let agent = g.add(Agent::environment("Operator")).expect("agent");

    let mut level: Vec<VertexId> = (0..fan_out.pow(depth as u32))
        .map(|i| {
            g.add(
                Goal::achieve(format!("Leaf{i} **If** Ready"))
                    .performed_by(agent, None)
                    .leaf(),
            )
            .expect("leaf")
        })
        .collect();

    let mut n = 0usize;
    while level.len() > 1 {
        level = level
            .chunks(fan_out)
            .map(|children| {
                n += 1;
                let r = g
                    .add(Refinement::new(n % 2 == 0, children.iter().copied()))
                    .expect("refinement");
                g.add(Goal::maintain(format!("Inner{n}")).refined_by(r))
                    .expect("inner goal")
            })
            .collect();
    }
    (g, level[0])
}

fn bench_render_link(c: &mut Criterion) {
    let (graph, root) = build_tree(5, 4);
    let text = graph.render(&[root], &[]).expect("render");
    let options = LinkOptions::default();

    let mut group = c.benchmark_group("goalgraph");
    group.sample_size(50);

    group.bench_function("render_1024_leaves", |b| {
        b.iter(|| {
            let text = graph.render(black_box(&[root]), &[]).expect("render");
            black_box(text.len());
        });
    });

    group.bench_function("encode_link_1024_leaves", |b| {
        b.iter(|| {
            let url = encode_link(black_box(&text), &options).expect("link");
            black_box(url.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_link);
criterion_main!(benches);
