use criterion::{black_box, criterion_group, criterion_main, Criterion};

use answerlens_core::bank::{parse_bank_str, BUILTIN_BANK};

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");

    let medium_toml = generate_bank_toml(50);
    let large_toml = generate_bank_toml(500);

    group.bench_function("builtin", |b| {
        b.iter(|| parse_bank_str(black_box(BUILTIN_BANK), black_box("default.toml".as_ref())))
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&medium_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("500_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&large_toml), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn generate_bank_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[bank]
id = "bench"
name = "Benchmark"
"#,
    );
    for i in 0..n {
        let question_type = if i % 3 == 0 { "HR" } else { "Technical" };
        s.push_str(&format!(
            r#"
[[questions]]
id = "q_{i}"
text = "Explain concept number {i}."
question_type = "{question_type}"
category = "Category {c}"
difficulty = "Medium"
reference_answer = """
Concept {i} is explained here with enough words to be a usable reference answer."""
"#,
            c = i % 5
        ));
    }
    s
}

criterion_group!(benches, bench_bank_parsing);
criterion_main!(benches);
