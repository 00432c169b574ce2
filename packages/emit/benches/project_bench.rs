use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ldcraft_emit::{project, snippet};
use ldcraft_form::{FormState, IdentifierKey, Review};

fn project_minimal_state(c: &mut Criterion) {
    let state = FormState::default();

    c.bench_function("project_minimal_state", |b| {
        b.iter(|| project(black_box(&state)))
    });
}

fn project_populated_state(c: &mut Criterion) {
    let mut state = FormState {
        product_name: "Trail Runner".to_string(),
        image_url: "https://cdn.example.test/shoe.jpg".to_string(),
        brand: "Acme".to_string(),
        description: "Lightweight trail shoe with a rock plate".to_string(),
        rating_value: 4.5,
        rating_count: 1240.0,
        ..FormState::default()
    };

    for key in IdentifierKey::ALL {
        state.selected_identifiers.push(key);
        state
            .identifier_values
            .insert(key, format!("value-{}", key.key()));
    }

    for i in 0..50 {
        state.reviews.push(Review {
            review_title: format!("Review {}", i),
            review_body: "Comfortable out of the box, grippy on wet rock.".to_string(),
            rating: 1.0 + (i % 5) as f64,
            date: "2024-01-15".to_string(),
            author: "Sam".to_string(),
            publisher: "Gear Blog".to_string(),
        });
    }

    c.bench_function("project_populated_state", |b| {
        b.iter(|| project(black_box(&state)))
    });

    c.bench_function("snippet_populated_state", |b| {
        b.iter(|| snippet(black_box(&state)))
    });
}

criterion_group!(benches, project_minimal_state, project_populated_state);
criterion_main!(benches);
