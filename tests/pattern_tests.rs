// Host-side tests for the base point-cloud generators.

use field_core::pattern::{self, Pattern};
use field_core::{FieldError, FieldParams};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use rand::prelude::*;
use std::io::Cursor;

fn points(flat: &[f32]) -> impl Iterator<Item = [f32; 3]> + '_ {
    flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
}

fn encode_png(image: RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encode");
    bytes
}

/// 8x8 image whose top half is opaque white and bottom half transparent.
fn top_half_white() -> RgbaImage {
    RgbaImage::from_fn(8, 8, |_, y| {
        if y < 4 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([255, 255, 255, 0])
        }
    })
}

#[test]
fn builtin_generators_return_three_floats_per_point() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(1);
    for n in [0, 1, 2, 7, 1000] {
        for p in Pattern::BUILTIN {
            let out = pattern::generate(&p, n, &params, &mut rng).expect("builtin");
            assert_eq!(out.len(), 3 * n, "{p} with n={n}");
        }
    }
}

#[test]
fn image_pattern_is_not_a_builtin_generator() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(1);
    let p = Pattern::ImageSilhouette("logo.png".into());
    assert!(pattern::generate(&p, 10, &params, &mut rng).is_none());
}

#[test]
fn sphere_seeds_differ_but_stay_inside_radius() {
    let a = pattern::sphere(1000, 10.0, &mut StdRng::seed_from_u64(1));
    let b = pattern::sphere(1000, 10.0, &mut StdRng::seed_from_u64(2));
    assert_eq!(a.len(), 3000);
    assert_eq!(b.len(), 3000);
    assert_ne!(a, b);
    for [x, y, z] in points(&a).chain(points(&b)) {
        let r = (x * x + y * y + z * z).sqrt();
        assert!(r <= 10.0 + 1e-4, "radius {r}");
    }
}

#[test]
fn same_seed_reproduces_the_same_cloud() {
    let a = pattern::galaxy(500, 10.0, 2.0, &mut StdRng::seed_from_u64(9));
    let b = pattern::galaxy(500, 10.0, 2.0, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn sphere_fills_the_volume_not_just_the_surface() {
    let a = pattern::sphere(4000, 10.0, &mut StdRng::seed_from_u64(5));
    let inner = points(&a)
        .filter(|[x, y, z]| (x * x + y * y + z * z).sqrt() < 5.0)
        .count();
    // a uniform ball keeps 1/8 of its points inside half the radius
    let share = inner as f32 / 4000.0;
    assert!((share - 0.125).abs() < 0.03, "inner share {share}");
}

#[test]
fn cube_stays_within_half_size() {
    let a = pattern::cube(2000, 15.0, &mut StdRng::seed_from_u64(3));
    for [x, y, z] in points(&a) {
        for v in [x, y, z] {
            assert!(v.abs() <= 7.5, "{v}");
        }
    }
}

#[test]
fn heart_is_filled_with_bounded_thickness() {
    let a = pattern::heart(2000, 1.0, 5.0, &mut StdRng::seed_from_u64(4));
    let mut near_centre = 0;
    for [x, y, z] in points(&a) {
        assert!(x.abs() <= 8.0 + 1e-4);
        assert!(y.abs() <= 8.5 + 1e-4);
        assert!(z.abs() <= 2.5);
        if x.abs() < 2.0 && y.abs() < 2.0 {
            near_centre += 1;
        }
    }
    assert!(near_centre > 0, "heart should be filled, not outlined");
}

#[test]
fn galaxy_is_a_thin_disc_of_radius_ten() {
    let a = pattern::galaxy(2000, 10.0, 2.0, &mut StdRng::seed_from_u64(6));
    for [x, y, z] in points(&a) {
        assert!((x * x + z * z).sqrt() <= 10.0 + 1e-4);
        assert!(y.abs() <= 1.0);
    }
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("sphere".parse::<Pattern>().unwrap(), Pattern::Sphere);
    assert_eq!("Cube".parse::<Pattern>().unwrap(), Pattern::Cube);
    assert_eq!(" HEART ".parse::<Pattern>().unwrap(), Pattern::Heart);
    assert_eq!("galaxy".parse::<Pattern>().unwrap(), Pattern::Galaxy);
    assert!(matches!(
        "torus".parse::<Pattern>(),
        Err(FieldError::UnknownPattern(name)) if name == "torus"
    ));
    assert_eq!(Pattern::ImageSilhouette("a.png".into()).to_string(), "image:a.png");
}

#[test]
fn silhouette_keeps_bright_opaque_pixels_with_y_flipped() {
    let params = FieldParams::default();
    let mask = pattern::silhouette_mask(&top_half_white(), &params.silhouette);
    // stride 2 on an 8x8 grid: rows 0 and 2, columns 0, 2, 4, 6
    assert_eq!(mask.len(), 8);
    for [x, y] in &mask {
        assert!(*y > 0.0, "top rows map above the origin");
        assert!(x.abs() <= 0.4 + 1e-6);
    }
}

#[test]
fn silhouette_rejects_dark_pixels() {
    let params = FieldParams::default();
    let dark = RgbaImage::from_pixel(6, 6, Rgba([40, 40, 40, 255]));
    assert!(pattern::silhouette_mask(&dark, &params.silhouette).is_empty());
}

#[test]
fn silhouette_draws_exactly_count_points_from_the_mask() {
    let params = FieldParams::default();
    let mask = pattern::silhouette_mask(&top_half_white(), &params.silhouette);
    let mut rng = StdRng::seed_from_u64(8);
    let out = pattern::silhouette_points(&top_half_white(), 300, &params, &mut rng);
    assert_eq!(out.len(), 900);
    for [x, y, z] in points(&out) {
        assert!(mask.contains(&[x, y]));
        assert!(z.abs() <= 1.0);
    }
}

#[test]
fn empty_mask_falls_back_to_sphere() {
    let params = FieldParams::default();
    let blank = RgbaImage::new(16, 16);
    let from_image = pattern::silhouette_points(&blank, 250, &params, &mut StdRng::seed_from_u64(12));
    let sphere = pattern::sphere(250, params.sphere_radius, &mut StdRng::seed_from_u64(12));
    assert_eq!(from_image, sphere);
}

#[test]
fn silhouette_decodes_png_bytes() {
    let params = FieldParams::default();
    let bytes = encode_png(top_half_white());
    let out = pattern::silhouette_from_bytes(&bytes, 64, &params, &mut StdRng::seed_from_u64(2))
        .expect("decodes");
    assert_eq!(out.len(), 64 * 3);
    assert!(points(&out).all(|[_, y, _]| y > 0.0));
}

#[test]
fn undecodable_bytes_report_an_error() {
    let params = FieldParams::default();
    let err = pattern::silhouette_from_bytes(b"not an image", 10, &params, &mut thread_rng())
        .unwrap_err();
    assert!(matches!(err, FieldError::ImageDecode(_)));
}

#[test]
fn shape_thickness_comes_from_field_params() {
    let params = FieldParams {
        heart_thickness: 0.0,
        galaxy_thickness: 0.0,
        ..FieldParams::default()
    };
    for shape in [Pattern::Heart, Pattern::Galaxy] {
        let flat = pattern::generate(&shape, 300, &params, &mut StdRng::seed_from_u64(8)).unwrap();
        let flat_axis = if shape == Pattern::Heart { 2 } else { 1 };
        for p in points(&flat) {
            assert_eq!(p[flat_axis], 0.0, "{shape} should be flat");
        }
    }
}
