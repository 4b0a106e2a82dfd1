//! Inversions of the probability of being served within a deadline
//!
//! The closed forms solve
//!
//! ```text
//! p = 1 - C·exp(-(S - A)·t / mst)
//! ```
//!
//! for `mst` or `t`. With a request frequency `λ` instead of a traffic
//! value, `A = λ·mst` and the equation becomes
//!
//! ```text
//! ln C(A) = ln(1 - p) + λ·t·(S - A) / A
//! ```
//!
//! whose left side rises and right side falls with `A`.

use super::{relabel, undefined_as};
use crate::blocking::BlockingModel;
use crate::calculator::ErlangC;
use crate::error::{ErlangError, Result};
use crate::formulas::no_steady_state;
use crate::search::{generic_servers, generic_traffic};
use crate::solver::cross;
use crate::types::Param;
use crate::utils::validate_params;

impl<M: BlockingModel> ErlangC<M> {
    /// Fewest servers serving at least `probability` of requests within `maxtime`
    ///
    /// Server counts that cannot carry the traffic count as not meeting
    /// the target.
    pub fn servers_maxtime(
        &self,
        traffic: f64,
        mean_service_time: f64,
        maxtime: f64,
        probability: f64,
    ) -> Result<u32> {
        validate_params(&[
            Param::traffic(traffic),
            Param::time(mean_service_time),
            Param::time(maxtime),
            Param::probability(probability),
        ])?;

        if traffic == 0.0 {
            return Ok(0);
        }

        generic_servers(
            |servers| {
                undefined_as(
                    self.maxtime_probability(traffic, servers, mean_service_time, maxtime)
                        .map(|served| served < probability),
                    true,
                )
            },
            self.config().max_servers,
        )
        .map_err(relabel("servers_maxtime"))
    }

    /// Most traffic `servers` can take while serving more than `probability`
    /// of requests within `maxtime`
    pub fn traffic_maxtime(
        &self,
        servers: u32,
        mean_service_time: f64,
        maxtime: f64,
        probability: f64,
        precision: Option<f64>,
    ) -> Result<f64> {
        validate_params(&[
            Param::servers(servers),
            Param::time(mean_service_time),
            Param::time(maxtime),
            Param::probability(probability),
            Param::precision(precision),
        ])?;

        if servers == 0 || probability == 1.0 {
            return Ok(0.0);
        }

        generic_traffic(
            |traffic| {
                undefined_as(
                    self.maxtime_probability(traffic, servers, mean_service_time, maxtime)
                        .map(|served| served > probability),
                    false,
                )
            },
            self.precision(precision),
            f64::from(servers),
        )
        .map_err(relabel("traffic_maxtime"))
    }

    /// Mean service time at which exactly `probability` of requests are
    /// served within `maxtime`
    ///
    /// ```text
    /// mst = -(S - A)·t / ln((1 - p) / C)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ErlangError::Undefined`] when the queue is unstable, when
    /// there is no traffic or no deadline, or when every service time
    /// already meets the target (`1 - p >= C`).
    pub fn service_time_maxtime(
        &self,
        traffic: f64,
        servers: u32,
        maxtime: f64,
        probability: f64,
    ) -> Result<f64> {
        const OP: &str = "service_time_maxtime";
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(maxtime),
            Param::probability(probability),
        ])?;

        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state(OP, traffic, servers));
        }
        if traffic == 0.0 {
            return Err(ErlangError::undefined(OP, "without traffic nobody waits, any service time qualifies"));
        }
        if probability == 1.0 {
            return Ok(0.0);
        }
        if maxtime == 0.0 {
            return Err(ErlangError::undefined(OP, "no request is served within a zero deadline"));
        }

        let ratio = (1.0 - probability) / self.wait_probability(traffic, servers)?;
        if ratio >= 1.0 {
            return Err(ErlangError::undefined(
                OP,
                format!("target {} is met for any service time", probability),
            ));
        }

        Ok(-spare * maxtime / ratio.ln())
    }

    /// Mean service time at which `probability` of requests are served
    /// within `maxtime`, given the request `frequency` instead of traffic
    ///
    /// Traffic is `frequency · mst`, so both sides of the formula move with
    /// the unknown. The crossing is bisected over traffic in `(0, servers)`
    /// to `precision`.
    pub fn service_time2_maxtime(
        &self,
        servers: u32,
        frequency: f64,
        maxtime: f64,
        probability: f64,
        precision: Option<f64>,
    ) -> Result<f64> {
        const OP: &str = "service_time2_maxtime";
        validate_params(&[
            Param::servers(servers),
            Param::frequency(frequency),
            Param::time(maxtime),
            Param::probability(probability),
            Param::precision(precision),
        ])?;

        if probability == 1.0 {
            return Ok(0.0);
        }
        if servers == 0 {
            return Err(ErlangError::undefined(OP, "no servers to serve the queue"));
        }
        if frequency == 0.0 {
            return Err(ErlangError::undefined(OP, "without requests any service time qualifies"));
        }
        if maxtime == 0.0 {
            return Err(ErlangError::undefined(OP, "no request is served within a zero deadline"));
        }

        let capacity = f64::from(servers);
        let target = (1.0 - probability).ln();
        let traffic = cross(
            |traffic| Ok(self.wait_probability(traffic, servers)?.ln()),
            |traffic| Ok(target + frequency * maxtime * (capacity - traffic) / traffic),
            0.0,
            capacity,
            self.precision(precision),
        )?;

        Ok(traffic / frequency)
    }

    /// Deadline within which exactly `probability` of requests are served
    ///
    /// ```text
    /// t = -mst·ln((1 - p) / C) / (S - A)
    /// ```
    ///
    /// Returns 0 when there is no traffic, the service time is zero, or the
    /// target is met by any positive deadline (`1 - p >= C`).
    ///
    /// # Errors
    ///
    /// Returns [`ErlangError::Undefined`] when the queue is unstable or
    /// `probability` is 1.
    pub fn max_time_maxtime(
        &self,
        traffic: f64,
        servers: u32,
        mean_service_time: f64,
        probability: f64,
    ) -> Result<f64> {
        const OP: &str = "max_time_maxtime";
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(mean_service_time),
            Param::probability(probability),
        ])?;

        if traffic == 0.0 || mean_service_time == 0.0 {
            return Ok(0.0);
        }
        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state(OP, traffic, servers));
        }
        if probability == 1.0 {
            return Err(ErlangError::undefined(OP, "serving every request needs an unbounded deadline"));
        }

        let ratio = (1.0 - probability) / self.wait_probability(traffic, servers)?;
        if ratio >= 1.0 {
            return Ok(0.0);
        }

        Ok(-mean_service_time * ratio.ln() / spare)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErlangC, ErlangError};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {} within {}, got {}",
            expected,
            tol,
            actual
        );
    }

    #[test]
    fn test_servers_maxtime_meets_target() {
        let engine = ErlangC::new();
        let servers = engine.servers_maxtime(5.0, 60.0, 20.0, 0.95).unwrap();
        let served = engine.maxtime_probability(5.0, servers, 60.0, 20.0).unwrap();
        assert!(served >= 0.95);
        let fewer = engine.maxtime_probability(5.0, servers - 1, 60.0, 20.0);
        assert!(fewer.map(|p| p < 0.95).unwrap_or(true));
    }

    #[test]
    fn test_servers_maxtime_skips_unstable_counts() {
        let engine = ErlangC::new();
        // counts up to 5 cannot carry 5 Erlangs and must not stop the search
        let servers = engine.servers_maxtime(5.0, 60.0, 20.0, 0.01).unwrap();
        assert_eq!(servers, 6);
        assert_eq!(engine.servers_maxtime(0.0, 60.0, 20.0, 0.99).unwrap(), 0);
    }

    #[test]
    fn test_servers_maxtime_zero_deadline_unreachable() {
        let engine = ErlangC::with_config(crate::ErlangConfig::new().with_max_servers(256)).unwrap();
        let result = engine.servers_maxtime(5.0, 60.0, 0.0, 0.5);
        assert!(matches!(
            result,
            Err(ErlangError::Unreachable { operation: "servers_maxtime", .. })
        ));
    }

    #[test]
    fn test_traffic_maxtime_round_trip() {
        let engine = ErlangC::new();
        let traffic = engine.traffic_maxtime(10, 60.0, 20.0, 0.9, Some(1e-7)).unwrap();
        assert!(traffic > 0.0 && traffic < 10.0);
        let served = engine.maxtime_probability(traffic, 10, 60.0, 20.0).unwrap();
        assert!(served > 0.9);
        assert_close(served, 0.9, 1e-5);
    }

    #[test]
    fn test_service_time_maxtime_round_trip() {
        let engine = ErlangC::new();
        let mst = engine.service_time_maxtime(5.0, 10, 20.0, 0.99).unwrap();
        assert!(mst > 0.0);
        let served = engine.maxtime_probability(5.0, 10, mst, 20.0).unwrap();
        assert_close(served, 0.99, 1e-9);
    }

    #[test]
    fn test_service_time_maxtime_undefined_cases() {
        let engine = ErlangC::new();
        assert!(engine.service_time_maxtime(5.0, 5, 20.0, 0.9).unwrap_err().is_undefined());
        assert!(engine.service_time_maxtime(0.0, 5, 20.0, 0.9).unwrap_err().is_undefined());
        // 1 - C(5, 10) = 0.964, a lower target holds for any service time
        assert!(engine.service_time_maxtime(5.0, 10, 20.0, 0.5).unwrap_err().is_undefined());
        assert_eq!(engine.service_time_maxtime(5.0, 10, 20.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_max_time_maxtime_round_trip() {
        let engine = ErlangC::new();
        let maxtime = engine.max_time_maxtime(5.0, 10, 60.0, 0.99).unwrap();
        assert!(maxtime > 0.0);
        let served = engine.maxtime_probability(5.0, 10, 60.0, maxtime).unwrap();
        assert_close(served, 0.99, 1e-9);
    }

    #[test]
    fn test_max_time_maxtime_edges() {
        let engine = ErlangC::new();
        assert_eq!(engine.max_time_maxtime(0.0, 3, 60.0, 0.9).unwrap(), 0.0);
        assert_eq!(engine.max_time_maxtime(5.0, 10, 60.0, 0.5).unwrap(), 0.0);
        assert!(engine.max_time_maxtime(5.0, 10, 60.0, 1.0).unwrap_err().is_undefined());
        assert!(engine.max_time_maxtime(5.0, 4, 60.0, 0.9).unwrap_err().is_undefined());
    }

    #[test]
    fn test_service_time2_maxtime_round_trip() {
        let engine = ErlangC::new();
        // 0.1 requests per second, 10 servers, 80% served within 20 seconds
        let mst = engine.service_time2_maxtime(10, 0.1, 20.0, 0.8, Some(1e-9)).unwrap();
        let traffic = 0.1 * mst;
        assert!(traffic > 0.0 && traffic < 10.0);
        let served = engine.maxtime_probability(traffic, 10, mst, 20.0).unwrap();
        assert_close(served, 0.8, 1e-6);
    }

    #[test]
    fn test_service_time2_maxtime_edges() {
        let engine = ErlangC::new();
        assert_eq!(engine.service_time2_maxtime(10, 0.1, 20.0, 1.0, None).unwrap(), 0.0);
        assert!(engine.service_time2_maxtime(0, 0.1, 20.0, 0.8, None).unwrap_err().is_undefined());
        assert!(engine.service_time2_maxtime(10, 0.0, 20.0, 0.8, None).unwrap_err().is_undefined());
        assert!(engine.service_time2_maxtime(10, -0.1, 20.0, 0.8, None).is_err());
    }
}
