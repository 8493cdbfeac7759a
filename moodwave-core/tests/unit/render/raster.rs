use super::*;

const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
  <circle cx="5" cy="5" r="4" fill="#08306b" opacity="1"/>
  <circle cx="15" cy="5" r="4" fill="#08306b" opacity="0"/>
</svg>
"##;

#[test]
fn rasterizes_at_intrinsic_size() {
    let frame = rasterize_svg(SVG, None).unwrap();
    assert_eq!((frame.width, frame.height), (20, 10));
    assert_eq!(frame.data.len(), 20 * 10 * 4);
    assert_eq!(frame.pixel(5, 5), Some([0x08, 0x30, 0x6b, 255]));
    assert_eq!(frame.pixel(15, 5).map(|p| p[3]), Some(0));
    assert_eq!(frame.pixel(20, 0), None);
}

#[test]
fn background_fills_uncovered_pixels() {
    let frame = rasterize_svg(SVG, Some(Rgb8::new(255, 255, 255))).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(15, 5), Some([255, 255, 255, 255]));
}

#[test]
fn straight_alpha_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 32, 0, 128],
    };
    assert_eq!(frame.into_straight_rgba8(), vec![128, 64, 0, 128]);
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(rasterize_svg("<not-svg", None).is_err());
}
