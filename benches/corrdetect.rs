use corrdetect::{Backend, ImageView, MatchConfig, Matcher, Template};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn extract_patch(
    image: &[u8],
    img_width: usize,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = (y0 + y) * img_width;
        out.extend_from_slice(&image[row + x0..row + x0 + width]);
    }
    out
}

fn bench_matcher(c: &mut Criterion) {
    let img_width = 320;
    let img_height = 240;
    let image = make_image(img_width, img_height);
    let image_view = ImageView::from_slice(&image, img_width, img_height).unwrap();

    let tpl_width = 48;
    let tpl_height = 40;
    let tpl_data = extract_patch(&image, img_width, 120, 100, tpl_width, tpl_height);
    let template = Template::new(tpl_data, tpl_width, tpl_height).unwrap();

    let direct = Matcher::new(MatchConfig::default());
    c.bench_function("ccoeff_direct", |b| {
        b.iter(|| black_box(direct.match_template(image_view, &template).unwrap()));
    });

    let fft = Matcher::new(MatchConfig {
        backend: Backend::Fft,
        ..MatchConfig::default()
    });
    c.bench_function("ccoeff_fft", |b| {
        b.iter(|| black_box(fft.match_template(image_view, &template).unwrap()));
    });

    if cfg!(feature = "rayon") {
        let parallel = Matcher::new(MatchConfig {
            parallel: true,
            ..MatchConfig::default()
        });
        c.bench_function("ccoeff_direct_parallel", |b| {
            b.iter(|| black_box(parallel.match_template(image_view, &template).unwrap()));
        });
    }
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
