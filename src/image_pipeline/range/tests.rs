use crate::image_pipeline::common::error::ConversionError;
use crate::image_pipeline::range::{ImageBuffer, PixelRange, RangeDirection, convert_range, map_sample};

fn rgb_rows(rows: &[[u8; 3]]) -> ImageBuffer {
    let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
    ImageBuffer::new(rows.len(), 1, 3, data).unwrap()
}

#[test]
fn test_fixed_points() {
    assert_eq!(map_sample(16, RangeDirection::ToFull), 0);
    assert_eq!(map_sample(235, RangeDirection::ToFull), 255);
    assert_eq!(map_sample(0, RangeDirection::ToLimited), 16);
    assert_eq!(map_sample(255, RangeDirection::ToLimited), 235);
}

#[test]
fn test_to_full_clamps_out_of_range_inputs() {
    assert_eq!(map_sample(0, RangeDirection::ToFull), 0);
    assert_eq!(map_sample(15, RangeDirection::ToFull), 0);
    assert_eq!(map_sample(17, RangeDirection::ToFull), 1);
    assert_eq!(map_sample(234, RangeDirection::ToFull), 254);
    assert_eq!(map_sample(236, RangeDirection::ToFull), 255);
    assert_eq!(map_sample(255, RangeDirection::ToFull), 255);
}

#[test]
fn test_outputs_stay_inside_target_range() {
    for v in 0..=255u8 {
        assert!(PixelRange::LIMITED.contains(map_sample(v, RangeDirection::ToLimited)));
    }
}

#[test]
fn test_reference_table() {
    let full = rgb_rows(&[
        [0, 0, 0],
        [16, 16, 16],
        [235, 235, 235],
        [255, 255, 255],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
    ]);
    let limited = rgb_rows(&[
        [16, 16, 16],
        [30, 30, 30],
        [218, 218, 218],
        [235, 235, 235],
        [235, 16, 16],
        [16, 235, 16],
        [16, 16, 235],
    ]);

    assert_eq!(convert_range(&full, RangeDirection::ToLimited).unwrap(), limited);
    assert_eq!(convert_range(&limited, RangeDirection::ToFull).unwrap(), full);
}

#[test]
fn test_round_trip_within_one() {
    for v in 0..=255u8 {
        let back = map_sample(map_sample(v, RangeDirection::ToLimited), RangeDirection::ToFull);
        assert!(back.abs_diff(v) <= 1, "full {} came back as {}", v, back);
    }

    for v in 16..=235u8 {
        let back = map_sample(map_sample(v, RangeDirection::ToFull), RangeDirection::ToLimited);
        assert!(back.abs_diff(v) <= 1, "limited {} came back as {}", v, back);
    }
}

#[test]
fn test_limited_gray_ramp_to_full() {
    let image = ImageBuffer::new(1, 3, 1, vec![16, 125, 235]).unwrap();
    let converted = convert_range(&image, RangeDirection::ToFull).unwrap();
    assert_eq!(converted.data, vec![0, 127, 255]);
    assert_eq!((converted.height, converted.width, converted.channels), (1, 3, 1));
}

#[test]
fn test_alpha_is_rescaled() {
    let image = ImageBuffer::new(1, 1, 4, vec![16, 16, 16, 235]).unwrap();
    let converted = convert_range(&image, RangeDirection::ToFull).unwrap();
    assert_eq!(converted.data, vec![0, 0, 0, 255]);
}

#[test]
fn test_rejects_zero_dimensions() {
    let result = ImageBuffer::new(0, 4, 3, Vec::new());
    assert!(matches!(result, Err(ConversionError::InvalidBuffer(_))));

    let image = ImageBuffer {
        height: 2,
        width: 0,
        channels: 3,
        bits_per_sample: 8,
        data: Vec::new(),
    };
    let result = convert_range(&image, RangeDirection::ToFull);
    assert!(matches!(result, Err(ConversionError::InvalidBuffer(_))));
}

#[test]
fn test_rejects_non_8_bit_samples() {
    let image = ImageBuffer {
        height: 1,
        width: 1,
        channels: 1,
        bits_per_sample: 16,
        data: vec![0],
    };
    let result = convert_range(&image, RangeDirection::ToLimited);
    assert!(matches!(result, Err(ConversionError::InvalidBuffer(_))));
}

#[test]
fn test_rejects_mismatched_sample_count() {
    let result = ImageBuffer::new(2, 2, 3, vec![0; 11]);
    assert!(matches!(result, Err(ConversionError::InvalidBuffer(_))));

    let result = ImageBuffer::new(1, 1, 2, vec![0; 2]);
    assert!(matches!(result, Err(ConversionError::InvalidBuffer(_))));
}

#[test]
fn test_direction_tokens() {
    assert_eq!("full".parse::<RangeDirection>().unwrap(), RangeDirection::ToFull);
    assert_eq!("limited".parse::<RangeDirection>().unwrap(), RangeDirection::ToLimited);
    assert_eq!(RangeDirection::ToLimited.to_string(), "limited");

    for token in ["Full", "LIMITED", "half", ""] {
        let result = token.parse::<RangeDirection>();
        assert!(matches!(result, Err(ConversionError::InvalidDirection(_))));
    }
}
