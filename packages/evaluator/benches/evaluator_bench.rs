use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use webbuilder_evaluator::{render_canvas, CanvasState};
use webbuilder_model::{Block, BlockKind, Document};

fn sample_document(len: usize) -> Document {
    let kinds = ["heading", "text", "button", "image"];
    let blocks = (0..len)
        .map(|i| {
            let props = json!({ "text": format!("Block {}", i), "size": "lg", "px": i % 17 });
            Block::new(
                format!("b-{}", i),
                BlockKind::from(kinds[i % kinds.len()]),
                props.as_object().cloned().unwrap_or_default(),
            )
        })
        .collect();
    Document::from_blocks(blocks)
}

fn render_small_canvas(c: &mut Criterion) {
    let doc = sample_document(10);

    c.bench_function("render_canvas_10", |b| {
        b.iter(|| render_canvas(black_box(&doc), &CanvasState::default()))
    });
}

fn render_large_canvas(c: &mut Criterion) {
    let doc = sample_document(500);
    let state = CanvasState {
        selected: Some("b-250"),
        active_drop: Some(3),
    };

    c.bench_function("render_canvas_500", |b| {
        b.iter(|| render_canvas(black_box(&doc), &state))
    });
}

criterion_group!(benches, render_small_canvas, render_large_canvas);
criterion_main!(benches);
