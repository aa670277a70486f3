//! Empirical false positive rate at design load.

use bloomset::hash::HashPair;
use bloomset::BloomFilter;

const ITEMS: u64 = 1000;
const PROBES: u64 = 10_000;
const TARGET: f64 = 0.01;

fn measured_fp_rate<H: HashPair>(filter: &BloomFilter<H>) -> f64 {
    for i in 0..ITEMS {
        filter.insert(&format!("member-{}", i));
    }

    for i in 0..ITEMS {
        assert!(filter.contains(&format!("member-{}", i)));
    }

    let hits = (0..PROBES)
        .filter(|i| filter.contains(&format!("outsider-{}", i)))
        .count();

    hits as f64 / PROBES as f64
}

#[test]
fn test_default_hash_pair_fp_rate() {
    let filter = BloomFilter::new(ITEMS, TARGET).unwrap();
    let rate = measured_fp_rate(&filter);
    assert!(rate < 0.03, "measured fp rate {} for target {}", rate, TARGET);
}

#[cfg(feature = "siphash")]
#[test]
fn test_sip_hash_pair_fp_rate() {
    use bloomset::SipHashPair;

    let filter = BloomFilter::with_hasher(ITEMS, TARGET, SipHashPair::new()).unwrap();
    let rate = measured_fp_rate(&filter);
    assert!(rate < 0.03, "measured fp rate {} for target {}", rate, TARGET);
}

#[test]
fn test_estimate_tracks_measurement() {
    let filter = BloomFilter::new(ITEMS, TARGET).unwrap();
    let measured = measured_fp_rate(&filter);
    let estimated = filter.estimate_fp_rate();

    assert!(estimated < 0.03, "estimated {}", estimated);
    assert!((measured - estimated).abs() < 0.02, "measured {} estimated {}", measured, estimated);
}

#[test]
fn test_tighter_target_gives_fewer_false_positives() {
    let loose = BloomFilter::new(ITEMS, 0.1).unwrap();
    let tight = BloomFilter::new(ITEMS, 0.001).unwrap();

    let loose_rate = measured_fp_rate(&loose);
    let tight_rate = measured_fp_rate(&tight);

    assert!(tight_rate < loose_rate, "tight {} loose {}", tight_rate, loose_rate);
    assert!(loose_rate < 0.2);
}
