//! End-to-end pipeline tests: 8-bit host frames through the levels filter.

use relevel_core::Frame;
use relevel_host::{CpuBackend, FilterSettings, LevelsFilter, RenderStatus, VideoFilter};

fn frame_from_8bit(pixels: &[[u8; 4]]) -> Frame {
    let mut image = image::RgbaImage::new(pixels.len() as u32, 1);
    for (x, px) in pixels.iter().enumerate() {
        image.put_pixel(x as u32, 0, image::Rgba(*px));
    }
    Frame::from_rgba8(&image)
}

fn frame_to_8bit(frame: &Frame) -> Vec<[u8; 4]> {
    frame.to_rgba8().unwrap().pixels().map(|p| p.0).collect()
}

#[test]
fn test_red_stretch_leaves_other_channels_untouched() {
    let settings = FilterSettings {
        red_min: 50,
        red_max: 200,
        ..FilterSettings::default()
    };
    let mut filter = LevelsFilter::create(&settings, &CpuBackend).unwrap();

    let mut frame = frame_from_8bit(&[[125, 255, 0, 255]]);
    assert_eq!(filter.render(&mut frame), RenderStatus::Rendered);

    let [r, g, b, a] = frame_to_8bit(&frame)[0];
    // (125 - 50) * 255 / 150 = 127.5; quantization may land on either side.
    assert!((127..=128).contains(&r), "red: {r}");
    assert_eq!(g, 255);
    assert_eq!(b, 0);
    assert_eq!(a, 255);
}

#[test]
fn test_out_of_range_values_clip_to_full_scale() {
    let settings = FilterSettings {
        red_min: 100,
        red_max: 150,
        green_min: 100,
        green_max: 150,
        blue_min: 100,
        blue_max: 150,
    };
    let mut filter = LevelsFilter::create(&settings, &CpuBackend).unwrap();

    let mut frame = frame_from_8bit(&[[20, 20, 20, 40], [230, 230, 230, 200]]);
    filter.render(&mut frame);

    let out = frame_to_8bit(&frame);
    assert_eq!(out[0], [0, 0, 0, 40]);
    assert_eq!(out[1], [255, 255, 255, 200]);
}

#[test]
fn test_identity_settings_round_trip_bit_exact() {
    let mut filter = LevelsFilter::create(&FilterSettings::default(), &CpuBackend).unwrap();
    let input = [[0, 1, 2, 3], [64, 128, 192, 255], [254, 253, 252, 0]];
    let mut frame = frame_from_8bit(&input);
    filter.render(&mut frame);
    assert_eq!(frame_to_8bit(&frame), input);
}

#[test]
fn test_settings_update_between_frames() {
    let mut filter = LevelsFilter::create(&FilterSettings::default(), &CpuBackend).unwrap();

    let mut frame = frame_from_8bit(&[[100, 100, 100, 255]]);
    filter.render(&mut frame);
    assert_eq!(frame_to_8bit(&frame)[0], [100, 100, 100, 255]);

    // Narrow every channel to [0, 100]: the next frame saturates.
    filter.update(&FilterSettings {
        red_min: 0,
        red_max: 100,
        green_min: 0,
        green_max: 100,
        blue_min: 0,
        blue_max: 100,
    });
    let mut frame = frame_from_8bit(&[[100, 100, 100, 255]]);
    filter.render(&mut frame);
    assert_eq!(frame_to_8bit(&frame)[0], [255, 255, 255, 255]);
}
