// benches/rows.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ksis_export::normalize::{ClubNormalizer, CorrectionStore, NameResolver, RowExtractor, Unattended};
use ksis_export::specs::results;

fn sample_fragment(rows: usize) -> String {
    let mut body = String::from(
        r#"<table id="myTablePrihlasky"><tr><th>Rank</th><th>Bib</th><th>Name</th><th>Born</th>
           <th>D</th><th>E</th><th>Vault</th><th>Bars</th><th>Beam</th><th>Floor</th><th>SV</th></tr>"#,
    );
    for i in 0..rows {
        body.push_str(&format!(
            r##"<tr><td>{i}</td><td>{}</td><td><a href="#" onclick="athlete({i})">LAST{i} First</a><br>Club {} Inc., ON</td>
               <td>2011</td><td>4.1</td><td>8.2</td><td>13.1</td><td>12.4</td><td>12.9</td><td>13.0</td><td><b>51.4</b></td></tr>"##,
            100 + i,
            i % 17,
        ));
    }
    body.push_str("</table>");
    body
}

fn bench_rows(c: &mut Criterion) {
    let doc = sample_fragment(120);

    c.bench_function("results_parse", |b| {
        b.iter(|| {
            let table = results::parse(black_box(&doc));
            black_box(table.map(|t| t.rows.len()))
        })
    });

    let table = results::parse(&doc).expect("bench fragment has a table");
    c.bench_function("rows_extract", |b| {
        b.iter(|| {
            let mut rows = RowExtractor::new(
                NameResolver::new(CorrectionStore::in_memory(), Box::new(Unattended)),
                ClubNormalizer::new(CorrectionStore::in_memory()),
            );
            let n = table
                .rows
                .iter()
                .filter_map(|cells| rows.extract(&table.headers, black_box(cells)))
                .count();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_rows);
criterion_main!(benches);
