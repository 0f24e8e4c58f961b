//! Integration tests for resampling and editing cubes

use restools_cube::{resample, CubeGeometry, CubeVolume, Error, Sampling, YFlip};
use rstest::{fixture, rstest};

/// Survey-like geometry with a smooth field of values
fn survey(rotation: f64, yflip: YFlip) -> CubeVolume {
    let geometry = CubeGeometry::new(
        [456_000.0, 5_925_000.0, 1_000.0],
        [25.0, 12.5, 4.0],
        rotation,
        yflip,
        [9, 7, 5],
    )
    .unwrap();
    CubeVolume::from_fn(geometry, |i, j, k| {
        (i as f32 * 0.5 + j as f32 * 2.0 - k as f32).sin() * 100.0
    })
    .with_lines((1000..1009).collect(), (2000..2014).step_by(2).collect())
    .unwrap()
}

#[fixture]
fn cube() -> CubeVolume {
    survey(30.0, YFlip::Normal)
}

#[rstest]
#[case(0.0, YFlip::Normal)]
#[case(30.0, YFlip::Normal)]
#[case(147.5, YFlip::Flipped)]
#[case(271.0, YFlip::Flipped)]
fn resample_onto_own_geometry(#[case] rotation: f64, #[case] yflip: YFlip) {
    let cube = survey(rotation, yflip);
    let result = resample(&cube, cube.geometry(), Sampling::Trilinear, 0.0);

    assert_eq!(result.geometry(), cube.geometry());
    for (a, b) in cube.values().iter().zip(result.values()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[rstest]
fn nearest_onto_own_geometry(cube: CubeVolume) {
    let result = resample(&cube, cube.geometry(), Sampling::Nearest, 0.0);
    assert_eq!(result.values(), cube.values());
}

#[rstest]
fn outside_samples_take_the_fill_value(cube: CubeVolume) {
    // same grid shifted well clear of the source
    let g = cube.geometry();
    let mut origin = g.origin();
    origin[0] += 10_000.0;
    let target = CubeGeometry::new(origin, g.increment(), g.rotation(), g.yflip(), g.dims()).unwrap();

    let result = resample(&cube, &target, Sampling::Trilinear, -999.25);
    assert!(result.values().iter().all(|v| *v == -999.25));
}

#[rstest]
fn partial_overlap(cube: CubeVolume) {
    // half a cell beyond the last column is outside, the rest is inside
    let g = cube.geometry();
    let origin = g.to_physical([4.5, 0.0, 0.0]);
    let target = CubeGeometry::new(origin, g.increment(), g.rotation(), g.yflip(), g.dims()).unwrap();

    let result = resample(&cube, &target, Sampling::Trilinear, f32::MAX);
    for j in 0..7 {
        for i in 0..9 {
            let value = result.get(i, j, 2).unwrap();
            if i < 4 {
                assert_ne!(value, f32::MAX);
            } else {
                assert_eq!(value, f32::MAX);
            }
        }
    }
}

#[rstest]
fn output_has_target_geometry(cube: CubeVolume) {
    let target =
        CubeGeometry::new([456_100.0, 5_925_100.0, 1_002.0], [10.0, 10.0, 2.0], 0.0, YFlip::Normal, [3, 4, 5])
            .unwrap();
    let result = resample(&cube, &target, Sampling::Trilinear, 0.0);
    assert_eq!(*result.geometry(), target);
    assert_eq!(result.values().len(), 60);
    assert_eq!(result.ilines(), [1, 2, 3]);
    assert_eq!(result.xlines(), [1, 2, 3, 4]);
}

#[test]
fn linear_fields_are_reproduced() {
    // trilinear interpolation is exact for a linear field
    let geometry =
        CubeGeometry::new([0.0; 3], [10.0, 10.0, 10.0], 0.0, YFlip::Normal, [5, 5, 5]).unwrap();
    let cube = CubeVolume::from_fn(geometry, |i, j, k| (i + 2 * j + 3 * k) as f32);

    let target =
        CubeGeometry::new([5.0, 5.0, 5.0], [10.0, 10.0, 10.0], 0.0, YFlip::Normal, [4, 4, 4]).unwrap();
    let result = resample(&cube, &target, Sampling::Trilinear, 0.0);
    let expected = CubeVolume::from_fn(target, |i, j, k| (i + 2 * j + 3 * k) as f32 + 3.0);

    for (a, b) in result.values().iter().zip(expected.values()) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[rstest]
fn undefined_samples_stay_local(cube: CubeVolume) {
    let mut cube = cube;
    cube.set(4, 3, 2, f32::NAN).unwrap();
    let result = resample(&cube, cube.geometry(), Sampling::Trilinear, 0.0);
    assert!(result.get(4, 3, 2).unwrap().is_nan());
    assert!(result.get(3, 3, 2).unwrap().is_finite());
    assert!(result.get(4, 4, 2).unwrap().is_finite());
}

#[rstest]
fn thin_by_one_is_identity(cube: CubeVolume) {
    let mut thinned = cube.clone();
    thinned.thin([1, 1, 1]).unwrap();
    assert_eq!(thinned, cube);
}

#[test]
fn thin_halves_lateral_sampling() {
    let geometry =
        CubeGeometry::new([0.0; 3], [12.5, 25.0, 4.0], 10.0, YFlip::Normal, [4, 4, 4]).unwrap();
    let mut cube = CubeVolume::constant(geometry, 1.0);
    cube.thin([2, 2, 1]).unwrap();

    assert_eq!(cube.geometry().dims(), [2, 2, 4]);
    assert_eq!(cube.geometry().increment(), [25.0, 50.0, 4.0]);
    assert_eq!(cube.geometry().origin(), [0.0; 3]);
}

#[rstest]
fn thinned_samples_keep_positions(cube: CubeVolume) {
    let mut thinned = cube.clone();
    thinned.thin([2, 3, 2]).unwrap();
    assert_eq!(thinned.geometry().dims(), [5, 3, 3]);

    for (i, j, k) in [(0, 0, 0), (4, 2, 2), (1, 1, 1)] {
        let a = thinned.geometry().to_physical([i as f64, j as f64, k as f64]);
        let b = cube
            .geometry()
            .to_physical([(2 * i) as f64, (3 * j) as f64, (2 * k) as f64]);
        assert!(a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6));
        assert_eq!(thinned.get(i, j, k), cube.get(2 * i, 3 * j, 2 * k));
    }
    assert_eq!(thinned.ilines(), [1000, 1002, 1004, 1006, 1008]);
    assert_eq!(thinned.xlines(), [2000, 2006, 2012]);
}

#[rstest]
#[case(0.0, YFlip::Normal)]
#[case(30.0, YFlip::Normal)]
#[case(0.0, YFlip::Flipped)]
#[case(292.5, YFlip::Flipped)]
#[case(0.1, YFlip::Normal)]
#[case(0.1, YFlip::Flipped)]
#[case(10.1, YFlip::Normal)]
#[case(47.9, YFlip::Flipped)]
#[case(123.456, YFlip::Flipped)]
fn swap_twice_restores(#[case] rotation: f64, #[case] yflip: YFlip) {
    let cube = survey(rotation, yflip);
    let mut swapped = cube.clone();
    swapped.swap_axes();
    assert_ne!(swapped, cube);
    swapped.swap_axes();
    assert_eq!(swapped, cube);
}

#[rstest]
#[case(30.0, YFlip::Normal)]
#[case(200.0, YFlip::Flipped)]
fn swap_keeps_samples_in_place(#[case] rotation: f64, #[case] yflip: YFlip) {
    let cube = survey(rotation, yflip);
    let mut swapped = cube.clone();
    swapped.swap_axes();

    assert_eq!(swapped.geometry().dims(), [7, 9, 5]);
    assert_eq!(swapped.geometry().increment(), [12.5, 25.0, 4.0]);
    assert_eq!(swapped.ilines(), cube.xlines());
    assert_eq!(swapped.xlines(), cube.ilines());

    for (i, j, k) in [(0, 0, 0), (8, 6, 4), (3, 5, 1)] {
        assert_eq!(swapped.get(j, i, k), cube.get(i, j, k));
        let a = cube.geometry().to_physical([i as f64, j as f64, k as f64]);
        let b = swapped
            .geometry()
            .to_physical([j as f64, i as f64, k as f64]);
        assert!(a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6));
    }
}

#[rstest]
fn crop_full_range_is_identity(cube: CubeVolume) {
    let mut cropped = cube.clone();
    cropped.crop(0..=8, 0..=6, 0..=4).unwrap();
    assert_eq!(cropped, cube);

    cropped.crop_margins([(0, 0); 3]).unwrap();
    assert_eq!(cropped, cube);
}

#[rstest]
fn crop_keeps_positions(cube: CubeVolume) {
    let mut cropped = cube.clone();
    cropped.crop(2..=5, 1..=6, 3..=4).unwrap();

    assert_eq!(cropped.geometry().dims(), [4, 6, 2]);
    assert_eq!(cropped.ilines(), [1002, 1003, 1004, 1005]);
    assert_eq!(cropped.xlines()[0], 2002);

    let origin = cube.geometry().to_physical([2.0, 1.0, 3.0]);
    assert_eq!(cropped.geometry().origin(), origin);
    assert_eq!(cropped.get(0, 0, 0), cube.get(2, 1, 3));
    assert_eq!(cropped.get(3, 5, 1), cube.get(5, 6, 4));
}

#[rstest]
#[case([(9, 0), (0, 0), (0, 0)], 'i')]
#[case([(0, 0), (3, 4), (0, 0)], 'j')]
#[case([(0, 0), (0, 0), (0, 5)], 'k')]
fn crop_margins_too_large(cube: CubeVolume, #[case] margins: [(usize, usize); 3], #[case] expected: char) {
    let mut cropped = cube.clone();
    match cropped.crop_margins(margins) {
        Err(Error::RangeError { axis, .. }) => assert_eq!(axis, expected),
        other => panic!("unexpected result {other:?}"),
    }
    assert_eq!(cropped, cube);
}

#[rstest]
fn describe(cube: CubeVolume) {
    let text = cube.to_string();
    assert!(text.contains("Cube"));
    assert!(text.contains("1000 - 1008"));
    assert!(text.contains("rotation"));
    assert!(text.contains("mean"));
}
