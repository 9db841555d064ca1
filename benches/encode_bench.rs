use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

use ftsquery::query::{
    BooleanQuery, ConjunctionQuery, DisjunctionQuery, MatchQuery, NumericRangeQuery, TermQuery,
};
use ftsquery::{FacetSpec, QueryNode, SearchOptions, SearchRequest, SearchResult, SortSpec};

fn build_query(clauses: usize) -> QueryNode {
    let mut query = BooleanQuery::new();
    for i in 0..clauses {
        query = query
            .must(TermQuery::new(format!("term{}", i)).with_field("tags"))
            .should(MatchQuery::new(format!("text {}", i)).with_fuzziness(1))
            .must_not(
                NumericRangeQuery::new()
                    .with_min(i as i64, Some(true))
                    .with_max(i as i64 + 10, None)
                    .with_field("year"),
            );
    }
    let nested = ConjunctionQuery::new([
        QueryNode::from(query),
        DisjunctionQuery::new((0..clauses).map(|i| MatchQuery::new(format!("alt {}", i))))
            .with_min(1)
            .into(),
    ]);
    nested.into()
}

fn build_response(rows: usize) -> Value {
    let rows: Vec<Value> = (0..rows)
        .map(|i| {
            json!({
                "index": "beers_1",
                "id": format!("doc-{}", i),
                "score": 1.0 / (i as f64 + 1.0),
                "locations": [{
                    "field": "name",
                    "term": "ipa",
                    "position": 1,
                    "start_offset": 0,
                    "end_offset": 3,
                    "array_positions": null
                }],
                "fragments": {"name": ["<mark>ipa</mark> of the day"]},
                "fields": {"name": format!("beer {}", i), "abv": 6.5}
            })
        })
        .collect();
    json!({
        "rows": rows,
        "facets": {
            "styles": {
                "field": "style",
                "total": rows.len(),
                "missing": 0,
                "other": 0,
                "terms": [{"term": "ipa", "count": rows.len()}]
            }
        },
        "meta_data": {
            "metrics": {
                "took": 1000,
                "total_rows": rows.len(),
                "max_score": 1.0,
                "success_partition_count": 6,
                "error_partition_count": 0
            }
        }
    })
}

fn bench_encode_request(c: &mut Criterion) {
    let options = SearchOptions::new()
        .with_limit(20)
        .with_sort(SortSpec::score().with_desc(true))
        .with_facet("styles", FacetSpec::term("style"));

    let mut group = c.benchmark_group("encode_request");
    for clauses in [10usize, 100, 1_000] {
        let query = build_query(clauses);
        group.bench_with_input(BenchmarkId::from_parameter(clauses), &query, |b, query| {
            b.iter(|| {
                black_box(SearchRequest::new("beers", query, &options).to_json().unwrap());
            });
        });
    }
    group.finish();
}

fn bench_decode_response(c: &mut Criterion) {
    let options = SearchOptions::new().with_facet("styles", FacetSpec::term("style"));

    let mut group = c.benchmark_group("decode_response");
    for rows in [10usize, 100, 1_000] {
        let response = build_response(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &response, |b, response| {
            b.iter(|| {
                black_box(SearchResult::decode(response, &options).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode_request, bench_decode_response);
criterion_main!(benches);
