use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Test double that "segments" by thresholding the red channel and counts
/// how often it runs.
struct FakeSegmenter {
    calls: AtomicUsize,
}

impl FakeSegmenter {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl Segmenter for FakeSegmenter {
    fn segment(
        &self,
        image: &ImageRgb8,
        _points: &[PointPrompt],
    ) -> MaskfxResult<Segmentation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mask = MaskBitmap::from_fn(image.width(), image.height(), |x, y| {
            image.pixel(x, y)[0] > 127
        });
        Ok(Segmentation { mask, score: 0.5 })
    }
}

fn prompts() -> Vec<PointPrompt> {
    vec![
        PointPrompt {
            x_norm: 0.5,
            y_norm: 0.5,
            positive: true,
        },
        PointPrompt {
            x_norm: 0.1,
            y_norm: 0.9,
            positive: false,
        },
    ]
}

#[test]
fn summarize_counts_positive_and_negative() {
    let s = summarize_points(&prompts());
    assert_eq!(
        s,
        PointSummary {
            total: 2,
            positive: 1,
            negative: 1
        }
    );
}

#[test]
fn denormalize_maps_the_center_to_the_center() {
    let px = denormalize_points(&prompts(), 101, 101).unwrap();
    assert_eq!(px[0], (50, 50, true));
    assert_eq!(px[1], (10, 90, false));
}

#[test]
fn denormalize_rejects_out_of_range_points() {
    let bad = [PointPrompt {
        x_norm: 1.5,
        y_norm: 0.5,
        positive: true,
    }];
    assert!(denormalize_points(&bad, 10, 10).is_err());
    assert!(denormalize_points(&prompts(), 0, 10).is_err());
}

#[test]
fn caching_segmenter_memoizes_identical_requests() {
    let inner = FakeSegmenter::new();
    let caching = CachingSegmenter::new(inner);
    let img = ImageRgb8::filled(8, 8, [200, 10, 10]).unwrap();

    let a = caching.segment(&img, &prompts()).unwrap();
    let b = caching.segment(&img, &prompts()).unwrap();
    assert_eq!(a.mask, b.mask);
    assert_eq!(caching.inner.calls.load(Ordering::SeqCst), 1);
    assert_eq!(caching.cached_entries(), 1);
}

#[test]
fn caching_segmenter_misses_on_different_inputs() {
    let caching = CachingSegmenter::new(FakeSegmenter::new());
    let img_a = ImageRgb8::filled(8, 8, [200, 10, 10]).unwrap();
    let img_b = ImageRgb8::filled(8, 8, [10, 10, 10]).unwrap();

    caching.segment(&img_a, &prompts()).unwrap();
    caching.segment(&img_b, &prompts()).unwrap();
    let mut moved = prompts();
    moved[0].x_norm = 0.6;
    caching.segment(&img_a, &moved).unwrap();
    assert_eq!(caching.inner.calls.load(Ordering::SeqCst), 3);
    assert_eq!(caching.cached_entries(), 3);
}
