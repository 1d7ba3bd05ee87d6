//! Integration tests for netspec
//!
//! These tests go through the public API: parse, render, arithmetic and summaries.

use netspec::output::{format_summary, to_json};
use netspec::{summarize_networks, Family, NetSpecError, NetworkSpecification};

fn prefix_dotted(len: u32) -> String {
    let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
    mask.to_be_bytes()
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[test]
fn test_end_to_end_slash_30() {
    let net = NetworkSpecification::parse("192.168.0.10/30").unwrap();
    assert_eq!(net.address_text(), "192.168.0.8");
    assert_eq!(net.mask_text(), "255.255.255.252");
    assert_eq!(net.first_address().to_string(), "192.168.0.8");
    assert_eq!(net.last_address().to_string(), "192.168.0.11");
    assert_eq!(net.to_string(), "192.168.0.8/255.255.255.252");
}

#[test]
fn test_canonical_text_for_every_prefix() {
    for (addr, len) in [("0.0.0.0", 0), ("10.0.0.0", 8), ("172.16.0.0", 12), ("192.168.1.0", 24)]
        .into_iter()
        .chain((0..=32).map(|len| ("0.0.0.0", len)))
    {
        let text = format!("{addr}/{len}");
        let net: NetworkSpecification = text.parse().unwrap();
        let expected = if len == 32 {
            addr.to_string()
        } else {
            format!("{addr}/{}", prefix_dotted(len))
        };
        assert_eq!(net.to_string(), expected, "canonical form of {text}");
        assert_eq!(net.prefix_len(), Some(len));
    }
}

#[test]
fn test_masking_invariant() {
    let samples = [
        NetworkSpecification::parse("10.20.30.40/13").unwrap(),
        NetworkSpecification::v4(0xDEAD_BEEF, Some(0x0F0F_0F0F)),
        NetworkSpecification::v6(u128::MAX, Some(u128::MAX << 17)),
        NetworkSpecification::new(0x1234_5678, Some(0xFFFF_0000), Family::Ipv4).unwrap(),
    ];
    for net in samples {
        let width = net.family().all_ones();
        assert_eq!(net.address() & !net.mask() & width, 0, "{net:?}");
    }
}

#[test]
fn test_single_host_detection() {
    let host = NetworkSpecification::new(0x0A00_0001, None, Family::Ipv4).unwrap();
    assert!(host.is_single_host());
    let net = NetworkSpecification::parse("10.0.0.0/24").unwrap();
    assert!(!net.is_single_host());
}

#[test]
fn test_offset_and_first_last() {
    let net = NetworkSpecification::parse("10.0.0.0/24").unwrap();
    assert_eq!(net.address_at_offset(0).unwrap(), net.first_address());
    assert_eq!(net.first_address().to_string(), "10.0.0.0");
    assert_eq!(net.last_address().to_string(), "10.0.0.255");
    assert_eq!(net.address_at_offset(1).unwrap().to_string(), "10.0.0.1");
}

#[test]
fn test_overflow_rejection() {
    let top = NetworkSpecification::new((1u128 << 32) - 1, None, Family::Ipv4).unwrap();
    let err = top.address_at_offset(1).unwrap_err();
    assert!(matches!(err, NetSpecError::Range { .. }));
}

#[test]
fn test_parse_failures() {
    assert_eq!(
        NetworkSpecification::parse("not-an-ip").unwrap_err(),
        NetSpecError::Parse("not-an-ip".to_string())
    );
    assert!(NetworkSpecification::parse("10.0.0.0/33")
        .unwrap_err()
        .is_range());
}

#[test]
fn test_summarize_networks_text_and_json() {
    let networks = vec!["192.168.42.0/24".to_string(), "10.0.0.1/32".to_string()];
    let summaries = summarize_networks(&networks, &[1]).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].offsets[0].address, "192.168.42.1");
    assert!(summaries[1].single_host);

    let text = format_summary(&summaries[0]);
    assert!(text.contains("last: 192.168.42.255"));

    let json = to_json(&summaries, false).unwrap();
    assert!(json.starts_with(r#"[{"network":"192.168.42.0/255.255.255.0""#));
}

#[test]
fn test_summarize_networks_stops_at_first_error() {
    let networks = vec!["10.0.0.0/8".to_string(), "bogus".to_string()];
    let err = summarize_networks(&networks, &[]).unwrap_err();
    assert_eq!(err, NetSpecError::Parse("bogus".to_string()));
}
