// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ga_dph_scrape::core::{extract_literals, occurrences};
use ga_dph_scrape::specs::PositionTable;

/// Roughly bundle-shaped: minified glue with 24 literals, a few of them large.
fn synthetic_bundle() -> String {
    let mut s = String::from("!function(e){var t={};function n(r){return t[r]}}([");
    for i in 0..24 {
        let rows = if i % 6 == 0 { 5_000 } else { 50 };
        let mut payload = String::from("[");
        for r in 0..rows {
            if r > 0 { payload.push(','); }
            payload.push_str(&format!(r#"{{"county":"C\'{r}","cases":{r},"deaths":{i}}}"#));
        }
        payload.push(']');
        s.push_str(&format!("function(e,t,n){{e.exports=JSON.parse('{payload}')}},"));
    }
    s.push_str("]);");
    s
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_bundle();
    let table = PositionTable::latest();

    c.bench_function("extract_literals", |b| {
        b.iter(|| extract_literals(black_box(&doc)).map(str::len).sum::<usize>())
    });

    c.bench_function("occurrences_named", |b| {
        b.iter(|| {
            occurrences(black_box(&doc))
                .map(|occ| table.name_for(occ.index).len() + occ.content.len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
