//! Property-based tests for the Erlang formulas and solvers.
//!
//! These check the structural guarantees the inversions rely on: wait
//! probability is monotone in both servers and traffic, server searches
//! give back a sufficient staffing level, and the crossing solver lands
//! within precision of a known crossing.

use proptest::prelude::*;

use erlang_core::solver::cross;
use erlang_core::ErlangC;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn wait_probability_decreases_with_servers(traffic in 0.5f64..40.0, extra in 1u32..30) {
        let engine = ErlangC::new();
        let servers = traffic.ceil() as u32 + extra;

        let fewer = engine.wait_probability(traffic, servers).unwrap();
        let more = engine.wait_probability(traffic, servers + 1).unwrap();
        prop_assert!(more < fewer, "C({}, {}) = {} !< {}", traffic, servers + 1, more, fewer);
    }

    #[test]
    fn wait_probability_increases_with_traffic(
        servers in 1u32..60,
        low in 0.05f64..0.9,
        gap in 0.01f64..0.05,
    ) {
        let engine = ErlangC::new();
        let capacity = f64::from(servers);

        let lighter = engine.wait_probability(low * capacity, servers).unwrap();
        let heavier = engine.wait_probability((low + gap) * capacity, servers).unwrap();
        prop_assert!(heavier > lighter);
        prop_assert!((0.0..=1.0).contains(&lighter));
        prop_assert!((0.0..=1.0).contains(&heavier));
    }

    #[test]
    fn servers_waitprob_finds_sufficient_staffing(traffic in 0.5f64..40.0, extra in 1u32..20) {
        let engine = ErlangC::new();
        let servers = traffic.ceil() as u32 + extra;
        let target = engine.wait_probability(traffic, servers).unwrap();

        let found = engine.servers_waitprob(traffic, target).unwrap();
        prop_assert!(found <= servers);
        prop_assert!(engine.wait_probability(traffic, found).unwrap() <= target);
    }

    #[test]
    fn average_wait_time_round_trips_through_service_time(
        traffic in 0.5f64..30.0,
        extra in 1u32..10,
        waittime in 0.1f64..120.0,
    ) {
        let engine = ErlangC::new();
        let servers = traffic.ceil() as u32 + extra;

        let mst = engine.service_time_waittime(traffic, servers, waittime).unwrap();
        let back = engine.average_wait_time(traffic, servers, mst).unwrap();
        prop_assert!((back - waittime).abs() <= 1e-9 * waittime.max(1.0));
    }

    #[test]
    fn cross_finds_linear_crossing(
        crossing in -100.0f64..100.0,
        below in 0.1f64..100.0,
        above in 0.1f64..100.0,
        rise in 0.1f64..10.0,
        fall in 0.1f64..10.0,
        level in -10.0f64..10.0,
        exponent in 3i32..10,
    ) {
        let precision = 10f64.powi(-exponent);
        let asc = |v: f64| Ok(level + rise * (v - crossing));
        let desc = |v: f64| Ok(level - fall * (v - crossing));

        let found = cross(asc, desc, crossing - below, crossing + above, precision).unwrap();
        prop_assert!((found - crossing).abs() <= precision, "{} vs {}", found, crossing);
    }
}
