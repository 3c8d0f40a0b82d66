#![cfg(feature = "rayon")]

use corrdetect::kernel::{DirectParallel, DirectScalar, Kernel};
use corrdetect::{ImageView, MatchConfig, Matcher, Template, TemplatePlan};

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 11) ^ (y * 3) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

#[test]
fn parallel_kernel_matches_scalar_kernel() {
    let (width, height) = (90, 70);
    let image = make_image(width, height);
    let view = ImageView::from_slice(&image, width, height).unwrap();
    let tpl = make_image(13, 9);
    let plan = TemplatePlan::from_view(ImageView::from_slice(&tpl, 13, 9).unwrap());

    let scalar = DirectScalar::correlate(view, &plan).unwrap();
    let parallel = DirectParallel::correlate(view, &plan).unwrap();
    assert_eq!(scalar, parallel);
}

#[test]
fn parallel_matcher_matches_sequential() {
    let (width, height) = (180, 140);
    let image = make_image(width, height);
    let mut tpl = Vec::new();
    for y in 40..76 {
        tpl.extend_from_slice(&image[y * width + 50..y * width + 98]);
    }
    let template = Template::new(tpl, 48, 36).unwrap();
    let view = ImageView::from_slice(&image, width, height).unwrap();

    let sequential = Matcher::new(MatchConfig {
        threshold: 0.6,
        parallel: false,
        ..MatchConfig::default()
    });
    let parallel = Matcher::new(MatchConfig {
        threshold: 0.6,
        parallel: true,
        ..MatchConfig::default()
    });

    let seq = sequential.match_template(view, &template).unwrap();
    let par = parallel.match_template(view, &template).unwrap();
    assert_eq!(seq, par);
    assert!(par.iter().any(|d| d.x == 50 && d.y == 40));
}
