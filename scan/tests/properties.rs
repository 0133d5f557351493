use nalu_common::{Codec, NalUnit};
use nalu_scan::{scan, ScanError};

/// Builds a payload from NAL units given as (header, payload length).
fn build_payload(codec: Codec, units: &[(u16, usize)]) -> Vec<u8> {
    let mut data = vec![0x1C, 0x01, 0x00, 0x00, 0x21];

    for (i, &(header, payload_len)) in units.iter().enumerate() {
        let full_size = codec.header_size() + payload_len;
        data.extend_from_slice(&(full_size as u32).to_be_bytes());

        match codec {
            Codec::H264 => data.push(header as u8),
            Codec::Hevc => data.extend_from_slice(&header.to_be_bytes()),
        }

        data.extend((0..payload_len).map(|b| (b + i) as u8));
    }

    data
}

fn assert_contiguous(data: &[u8], nal_units: &[NalUnit]) {
    let mut expected_prefix = 5;

    for nal_unit in nal_units {
        assert_eq!(nal_unit.start_position(), expected_prefix + 4);
        expected_prefix = nal_unit.end_position();
    }

    assert_eq!(expected_prefix, data.len());
}

#[test]
fn test_well_formed_h264_payloads() -> Result<(), ScanError> {
    let headers: [u16; 8] = [0x67, 0x68, 0x06, 0x65, 0x41, 0x01, 0x0C, 0x09];

    for n in 0..=headers.len() {
        let units: Vec<_> = headers[..n]
            .iter()
            .enumerate()
            .map(|(i, &h)| (h, i * 37))
            .collect();
        let data = build_payload(Codec::H264, &units);

        let nal_units = scan(&data, Codec::H264)?;

        assert_eq!(nal_units.len(), n);
        for (nal_unit, &(header, payload_len)) in nal_units.iter().zip(&units) {
            assert_eq!(nal_unit.full_size() as usize, 1 + payload_len);
            assert_eq!(nal_unit.nal_type().value(), (header & 0x1F) as u8);
            assert_eq!(nal_unit.bytes(&data).map(|b| b[0] as u16), Some(header));
            assert_eq!(nal_unit.hash(), None);
        }
        assert_contiguous(&data, &nal_units);
    }

    Ok(())
}

#[test]
fn test_well_formed_hevc_payloads() -> Result<(), ScanError> {
    let units: [(u16, usize); 6] = [(0x4001, 20), (0x4201, 40), (0x4401, 6), (0x4E01, 3), (0x2601, 1000), (0x4C01, 0)];
    let data = build_payload(Codec::Hevc, &units);

    let nal_units = scan(&data, Codec::Hevc)?;

    let types: Vec<_> = nal_units.iter().map(|n| n.nal_type().value()).collect();
    assert_eq!(types, vec![32, 33, 34, 39, 19, 38]);
    assert!(nal_units.iter().all(|n| n.nal_type().is_hevc()));
    assert_eq!(nal_units[5].full_size(), 2);
    assert_contiguous(&data, &nal_units);

    Ok(())
}

#[test]
fn test_framing_header_only() -> Result<(), ScanError> {
    assert!(scan(&[0x17, 0x01, 0x00, 0x00, 0x00], Codec::H264)?.is_empty());
    assert!(scan(&[0x1C, 0x01, 0x00, 0x00, 0x00], Codec::Hevc)?.is_empty());
    Ok(())
}

#[test]
fn test_shorter_than_framing_header() {
    for len in 0..5 {
        let data = vec![0x17u8; len];
        assert!(matches!(
            scan(&data, Codec::H264),
            Err(ScanError::PrematureEnd { .. })
        ));
    }
}

#[test]
fn test_forbidden_zero_bit_anywhere_fails_the_scan() {
    let headers: [u16; 4] = [0x67, 0x68, 0x65, 0x41];

    for bad in 0..headers.len() {
        let mut units: Vec<(u16, usize)> = headers.iter().map(|&h| (h, 4)).collect();
        units[bad].0 |= 0x80;
        let data = build_payload(Codec::H264, &units);

        assert!(matches!(
            scan(&data, Codec::H264),
            Err(ScanError::InvalidHeaderBit { .. })
        ));
    }

    let data = build_payload(Codec::Hevc, &[(0x4001, 4), (0xCC01, 4)]);
    assert!(matches!(
        scan(&data, Codec::Hevc),
        Err(ScanError::InvalidHeaderBit { .. })
    ));
}

#[test]
fn test_length_smaller_than_header() {
    let mut data = build_payload(Codec::Hevc, &[(0x4001, 4)]);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x4C, 0x01]);

    assert!(matches!(
        scan(&data, Codec::Hevc),
        Err(ScanError::MalformedLength { size: 1, header_size: 2, .. })
    ));
}

#[test]
fn test_scanning_twice_is_identical() -> Result<(), ScanError> {
    let data = build_payload(Codec::H264, &[(0x67, 12), (0x68, 4), (0x65, 300), (0x0C, 16)]);

    let first = scan(&data, Codec::H264)?;
    let second = scan(&data, Codec::H264)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_dropping_filler_data() -> Result<(), ScanError> {
    let data = build_payload(Codec::H264, &[(0x09, 1), (0x0C, 64), (0x65, 30), (0x0C, 8)]);

    let kept: Vec<_> = scan(&data, Codec::H264)?
        .into_iter()
        .filter(|n| !n.nal_type().is_filler_data())
        .map(|n| n.nal_type().value())
        .collect();

    assert_eq!(kept, vec![9, 5]);
    Ok(())
}

#[test]
fn test_serialized_in_scan_order() -> Result<(), Box<dyn std::error::Error>> {
    let data = build_payload(Codec::Hevc, &[(0x4001, 2), (0x2601, 5)]);
    let nal_units = scan(&data, Codec::Hevc)?;

    let json = serde_json::to_value(&nal_units)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"startPosition": 9, "fullSize": 4, "isHevc": true, "typeValue": 32},
            {"startPosition": 17, "fullSize": 7, "isHevc": true, "typeValue": 19}
        ])
    );

    let restored: Vec<NalUnit> = serde_json::from_value(json)?;
    assert_eq!(restored, nal_units);
    Ok(())
}
