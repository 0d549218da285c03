//! Benchmarks for the list query pipeline
//!
//! Measures filter, sort, and range stages over in-memory movie lists.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mediaaccess::library::items;
use mediaaccess::media::{Category, MovieBasic};
use mediaaccess::query::{ListQuery, QueryExt};
use mediaaccess_common::{OrderBy, ProviderId, SortBy};

const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Horror", "Sci-Fi", "Thriller"];

/// Generate `n` movies with spread-out titles, years, genres and ratings
fn generate_movies(n: usize) -> Vec<MovieBasic> {
    (0..n)
        .map(|i| MovieBasic {
            id: format!("m{i}"),
            title: format!("Movie {:05}", (i * 7919) % n.max(1)),
            year: Some(1950 + (i % 75) as i32),
            genres: vec![
                GENRES[i % GENRES.len()].to_string(),
                GENRES[(i / 3) % GENRES.len()].to_string(),
            ],
            categories: if i % 4 == 0 {
                vec![Category::new("fav", "Favourites")]
            } else {
                Vec::new()
            },
            rating: (i % 5 != 0).then(|| (i % 100) as f32 / 10.0),
            ..Default::default()
        })
        .collect()
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for size in [100usize, 1_000, 10_000] {
        let movies = generate_movies(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("title", size), &movies, |b, movies| {
            b.iter(|| {
                items(black_box(movies.clone()))
                    .sorted(SortBy::Title, OrderBy::Asc)
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("rating_desc", size), &movies, |b, movies| {
            b.iter(|| {
                items(black_box(movies.clone()))
                    .sorted(SortBy::Rating, OrderBy::Desc)
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let movies = generate_movies(10_000);

    group.bench_function("genre", |b| {
        b.iter(|| {
            items(black_box(movies.clone()))
                .filter_genre(Some("Sci-Fi"))
                .count()
        });
    });

    group.bench_function("genre_and_category", |b| {
        b.iter(|| {
            items(black_box(movies.clone()))
                .filter_genre(Some("Drama"))
                .filter_category(Some("fav"))
                .count()
        });
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let movies = generate_movies(10_000);
    let query = ListQuery::new()
        .genre("Action")
        .sort(SortBy::Year, OrderBy::Desc);

    group.bench_function("first_page", |b| {
        b.iter(|| {
            query
                .apply(items(black_box(movies.clone())))
                .take_range(0, 50)
                .tagged(ProviderId::new(1))
                .count()
        });
    });

    group.bench_function("deep_page", |b| {
        b.iter(|| {
            query
                .apply(items(black_box(movies.clone())))
                .take_range(1_500, 1_550)
                .tagged(ProviderId::new(1))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sorting, bench_filtering, bench_full_pipeline);
criterion_main!(benches);
