mod tests {
    use myrtio_matrix_driver::encoder::{RESET_SYMBOL, SYMBOLS_PER_PIXEL};
    use myrtio_matrix_driver::{
        ChannelOrder, Encoder, Error, PulseTiming, ResetPlacement, Rgb, SymbolSet, WireTiming,
    };

    const ZERO: u8 = 0xC0;
    const ONE: u8 = 0xF0;

    fn encoder(order: ChannelOrder) -> Encoder {
        Encoder::new(order, SymbolSet::WS2812_6M4, WireTiming::WS2812_6M4)
    }

    fn encode(encoder: &Encoder, pixels: &[Rgb], brightness: u8) -> Vec<u8> {
        encoder.stream(pixels, brightness).collect()
    }

    /// Decode the data part of a stream back into bytes
    fn data_bytes(encoder: &Encoder, stream: &[u8]) -> Vec<u8> {
        let data = &stream[encoder.leading_padding()..stream.len() - encoder.trailing_padding()];
        data.chunks(8)
            .map(|symbols| {
                symbols
                    .iter()
                    .fold(0u8, |byte, symbol| (byte << 1) | u8::from(*symbol == ONE))
            })
            .collect()
    }

    #[test]
    fn test_reset_padding_exceeds_threshold() {
        let timing = WireTiming::WS2812_6M4;
        assert_eq!(timing.bit_duration_ns(), 156);
        assert_eq!(timing.reset_padding_bytes(), 41);
        assert!(timing.reset_padding_bytes() as u64 * 8 * 156 > 50_000);
    }

    #[test]
    fn test_padding_placement() {
        let both = encoder(ChannelOrder::Grb);
        assert_eq!((both.leading_padding(), both.trailing_padding()), (41, 41));

        let trailing = Encoder::new(
            ChannelOrder::Grb,
            SymbolSet::WS2812_6M4,
            WireTiming {
                reset: ResetPlacement::Trailing,
                ..WireTiming::WS2812_6M4
            },
        );
        assert_eq!(
            (trailing.leading_padding(), trailing.trailing_padding()),
            (0, 41)
        );
    }

    #[test]
    fn test_output_length_is_exact() {
        let encoder = encoder(ChannelOrder::Grb);
        for count in [0usize, 1, 7, 256] {
            let pixels = vec![Rgb { r: 9, g: 200, b: 31 }; count];
            let stream = encode(&encoder, &pixels, 255);
            let expected = 8 * 3 * count + encoder.leading_padding() + encoder.trailing_padding();
            assert_eq!(stream.len(), expected);
            assert_eq!(encoder.encoded_len(count), expected);
        }
    }

    #[test]
    fn test_data_region_uses_only_symbols() {
        let encoder = encoder(ChannelOrder::Grb);
        let pixels: Vec<Rgb> = (0..=255u8)
            .map(|v| Rgb {
                r: v,
                g: v.wrapping_mul(3),
                b: !v,
            })
            .collect();
        let stream = encode(&encoder, &pixels, 200);

        let (leading, rest) = stream.split_at(encoder.leading_padding());
        let (data, trailing) = rest.split_at(rest.len() - encoder.trailing_padding());
        assert!(leading.iter().all(|b| *b == RESET_SYMBOL));
        assert!(trailing.iter().all(|b| *b == RESET_SYMBOL));
        assert_eq!(data.len(), pixels.len() * SYMBOLS_PER_PIXEL);
        assert!(data.iter().all(|b| *b == ZERO || *b == ONE));
    }

    #[test]
    fn test_bits_are_msb_first() {
        let encoder = encoder(ChannelOrder::Rgb);
        let stream = encode(&encoder, &[Rgb { r: 0x80, g: 0x01, b: 0 }], 255);
        let data = &stream[encoder.leading_padding()..][..SYMBOLS_PER_PIXEL];
        assert_eq!(&data[..8], &[ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO]);
        assert_eq!(&data[8..16], &[ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE]);
        assert!(data[16..].iter().all(|b| *b == ZERO));
    }

    #[test]
    fn test_channel_order_on_the_wire() {
        let pixel = Rgb { r: 1, g: 2, b: 3 };
        let grb = encoder(ChannelOrder::Grb);
        assert_eq!(data_bytes(&grb, &encode(&grb, &[pixel], 255)), [2, 1, 3]);
        let bgr = encoder(ChannelOrder::Bgr);
        assert_eq!(data_bytes(&bgr, &encode(&bgr, &[pixel], 255)), [3, 2, 1]);
        assert_eq!(ChannelOrder::default(), ChannelOrder::Grb);
    }

    #[test]
    fn test_brightness_scales_with_truncation() {
        let encoder = encoder(ChannelOrder::Rgb);
        let pixel = Rgb { r: 255, g: 100, b: 1 };
        assert_eq!(
            data_bytes(&encoder, &encode(&encoder, &[pixel], 255)),
            [255, 100, 1]
        );
        assert_eq!(
            data_bytes(&encoder, &encode(&encoder, &[pixel], 128)),
            [128, 50, 0]
        );
        assert_eq!(
            data_bytes(&encoder, &encode(&encoder, &[pixel], 0)),
            [0, 0, 0]
        );
    }

    #[test]
    fn test_encode_into_matches_stream() {
        let encoder = encoder(ChannelOrder::Grb);
        let pixels = [Rgb { r: 10, g: 20, b: 30 }; 4];
        let mut out = [0xAAu8; 256];
        let written = encoder.encode_into(&pixels, 77, &mut out).unwrap();
        assert_eq!(written, encoder.encoded_len(4));
        assert_eq!(&out[..written], encode(&encoder, &pixels, 77).as_slice());
        assert_eq!(out[written], 0xAA);
    }

    #[test]
    fn test_encode_into_rejects_short_buffer() {
        let encoder = encoder(ChannelOrder::Grb);
        let mut out = [0u8; 100];
        assert_eq!(
            encoder.encode_into(&[Rgb::default(); 2], 255, &mut out),
            Err(Error::BufferTooSmall {
                required: 130,
                available: 100,
            })
        );
    }

    #[test]
    fn test_symbol_validation() {
        let rate = WireTiming::WS2812_6M4.bit_rate_hz;
        assert_eq!(SymbolSet::high_time_ns(ZERO, rate), 312);
        assert_eq!(SymbolSet::high_time_ns(ONE, rate), 624);
        assert!(SymbolSet::WS2812_6M4.validate(rate, PulseTiming::WS2812).is_ok());

        let same = SymbolSet { zero: ONE, one: ONE };
        assert!(same.validate(rate, PulseTiming::WS2812).is_err());

        let too_long = SymbolSet {
            zero: ZERO,
            one: 0xFF,
        };
        assert!(too_long.validate(rate, PulseTiming::WS2812).is_err());
        assert!(SymbolSet::WS2812_6M4.validate(0, PulseTiming::WS2812).is_err());
    }
}
