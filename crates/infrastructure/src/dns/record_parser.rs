//! Extraction of lookup results from hickory answer records
//!
//! Names are rendered with `Name::to_ascii`, so IDN hosts keep their
//! punycode form.

use dnslookup_domain::MxRecord;
use hickory_resolver::proto::rr::{Name, RData, Record, RecordType};

/// MX answers in the order the resolver returned them.
pub fn mx_records(records: &[Record]) -> Vec<MxRecord> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::MX(mx) => Some(MxRecord::new(mx.exchange().to_ascii(), mx.preference())),
            _ => None,
        })
        .collect()
}

/// Canonical name from an address answer: the owner of the first A/AAAA
/// record. Aliases have already been followed by the resolver, so for a
/// name without aliases this is the queried name itself.
pub fn canonical_name_from_addresses(records: &[Record]) -> Option<String> {
    records
        .iter()
        .find(|record| matches!(record.record_type(), RecordType::A | RecordType::AAAA))
        .map(|record| record.name().to_ascii())
}

/// Canonical name from a CNAME answer: follows the chain from the first
/// alias to its last target.
pub fn canonical_name_from_aliases(records: &[Record]) -> Option<String> {
    let mut current = records.iter().find_map(cname_target)?;

    // bounded by the answer size so a looping chain terminates
    for _ in 0..records.len() {
        let next = records
            .iter()
            .filter(|record| record.name() == current)
            .find_map(cname_target);

        match next {
            Some(target) => current = target,
            None => break,
        }
    }

    Some(current.to_ascii())
}

fn cname_target(record: &Record) -> Option<&Name> {
    match record.data() {
        RData::CNAME(cname) => Some(&cname.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::rr::rdata::{A, AAAA, CNAME, MX};
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn name(s: &str) -> Name {
        Name::from_ascii(s).unwrap()
    }

    fn a(owner: &str, ip: [u8; 4]) -> Record {
        Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
    }

    fn aaaa(owner: &str, ip: Ipv6Addr) -> Record {
        Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip)))
    }

    fn cname(owner: &str, target: &str) -> Record {
        Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
    }

    fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
        Record::from_rdata(
            name(owner),
            300,
            RData::MX(MX::new(preference, name(exchange))),
        )
    }

    // ========================================================================
    // MX
    // ========================================================================

    #[test]
    fn test_mx_records_keep_answer_order() {
        let records = vec![
            mx("example.com.", 20, "mx2.example.com."),
            mx("example.com.", 10, "mx1.example.com."),
        ];

        assert_eq!(
            mx_records(&records),
            vec![
                MxRecord::new("mx2.example.com.", 20),
                MxRecord::new("mx1.example.com.", 10),
            ]
        );
    }

    #[test]
    fn test_mx_records_skip_other_types() {
        let records = vec![
            cname("mail.example.com.", "example.com."),
            mx("example.com.", 5, "mx.example.com."),
        ];

        assert_eq!(
            mx_records(&records),
            vec![MxRecord::new("mx.example.com.", 5)]
        );
    }

    #[test]
    fn test_mx_exchange_stays_punycode() {
        let records = vec![mx("example.com.", 10, "xn--bcher-kva.example.")];

        assert_eq!(mx_records(&records)[0].host, "xn--bcher-kva.example.");
    }

    // ========================================================================
    // Canonical name
    // ========================================================================

    #[test]
    fn test_name_without_alias_is_its_own_canonical_name() {
        let records = vec![
            a("example.com.", [93, 184, 215, 14]),
            aaaa("example.com.", Ipv6Addr::LOCALHOST),
        ];

        assert_eq!(
            canonical_name_from_addresses(&records),
            Some("example.com.".to_string())
        );
    }

    #[test]
    fn test_address_answer_reports_end_of_alias_chain() {
        let records = vec![
            cname("www.example.com.", "edge.example.net."),
            cname("edge.example.net.", "host.cdn.example."),
            a("host.cdn.example.", [192, 0, 2, 1]),
        ];

        assert_eq!(
            canonical_name_from_addresses(&records),
            Some("host.cdn.example.".to_string())
        );
    }

    #[test]
    fn test_address_answer_without_addresses() {
        let records = vec![cname("www.example.com.", "edge.example.net.")];

        assert_eq!(canonical_name_from_addresses(&records), None);
        assert_eq!(canonical_name_from_addresses(&[]), None);
    }

    #[test]
    fn test_alias_chain_is_followed_to_last_target() {
        let records = vec![
            cname("www.example.com.", "edge.example.net."),
            cname("edge.example.net.", "host.cdn.example."),
        ];

        assert_eq!(
            canonical_name_from_aliases(&records),
            Some("host.cdn.example.".to_string())
        );
    }

    #[test]
    fn test_alias_loop_terminates() {
        let records = vec![
            cname("a.example.", "b.example."),
            cname("b.example.", "a.example."),
        ];

        assert!(canonical_name_from_aliases(&records).is_some());
    }

    #[test]
    fn test_no_alias_records() {
        let records = vec![a("example.com.", [192, 0, 2, 1])];

        assert_eq!(canonical_name_from_aliases(&records), None);
    }
}
