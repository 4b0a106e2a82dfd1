//! Inversions of the average wait time

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
    /// Fewest servers keeping the average wait at or below `waittime`
    ///
    /// A zero `waittime` cannot be met once there is traffic to serve and
    /// yields [`ErlangError::Unreachable`].
    pub fn servers_waittime(
        &self,
        traffic: f64,
        mean_service_time: f64,
        waittime: f64,
    ) -> Result<u32> {
        validate_params(&[
            Param::traffic(traffic),
            Param::time(mean_service_time),
            Param::time(waittime),
        ])?;

        if traffic == 0.0 || mean_service_time == 0.0 {
            return Ok(0);
        }
        if waittime == 0.0 {
            let limit = f64::from(self.config().max_servers);
            return Err(ErlangError::unreachable("servers_waittime", limit));
        }

        generic_servers(
            |servers| {
                undefined_as(
                    self.average_wait_time(traffic, servers, mean_service_time)
                        .map(|wait| wait > waittime),
                    true,
                )
            },
            self.config().max_servers,
        )
        .map_err(relabel("servers_waittime"))
    }

    /// Most traffic `servers` can take with an average wait below `waittime`
    pub fn traffic_waittime(
        &self,
        servers: u32,
        mean_service_time: f64,
        waittime: f64,
        precision: Option<f64>,
    ) -> Result<f64> {
        validate_params(&[
            Param::servers(servers),
            Param::time(mean_service_time),
            Param::time(waittime),
            Param::precision(precision),
        ])?;

        if servers == 0 || waittime == 0.0 {
            return Ok(0.0);
        }

        generic_traffic(
            |traffic| {
                undefined_as(
                    self.average_wait_time(traffic, servers, mean_service_time)
                        .map(|wait| wait < waittime),
                    false,
                )
            },
            self.precision(precision),
            f64::from(servers),
        )
        .map_err(relabel("traffic_waittime"))
    }

    /// Mean service time giving an average wait of exactly `waittime`
    ///
    /// ```text
    /// mst = W·(S - A) / C
    /// ```
    pub fn service_time_waittime(&self, traffic: f64, servers: u32, waittime: f64) -> Result<f64> {
        const OP: &str = "service_time_waittime";
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(waittime),
        ])?;

        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state(OP, traffic, servers));
        }
        if traffic == 0.0 {
            return Err(ErlangError::undefined(OP, "without traffic nobody waits, any service time qualifies"));
        }
        if waittime == 0.0 {
            return Ok(0.0);
        }

        let wait = self.wait_probability(traffic, servers)?;
        if wait == 0.0 {
            return Err(ErlangError::undefined(OP, "no request waits, any service time qualifies"));
        }

        Ok(waittime * spare / wait)
    }

    /// Mean service time giving an average wait of `waittime`, given the
    /// request `frequency` instead of traffic
    ///
    /// With `A = λ·mst` the average wait formula becomes
    /// `C(A) = λ·W·(S/A - 1)`; the left side rises and the right side falls
    /// with `A`, and the crossing is bisected over `(0, servers)`.
    pub fn service_time2_waittime(
        &self,
        servers: u32,
        frequency: f64,
        waittime: f64,
        precision: Option<f64>,
    ) -> Result<f64> {
        const OP: &str = "service_time2_waittime";
        validate_params(&[
            Param::servers(servers),
            Param::frequency(frequency),
            Param::time(waittime),
            Param::precision(precision),
        ])?;

        if waittime == 0.0 {
            return Ok(0.0);
        }
        if servers == 0 {
            return Err(ErlangError::undefined(OP, "no servers to serve the queue"));
        }
        if frequency == 0.0 {
            return Err(ErlangError::undefined(OP, "without requests any service time qualifies"));
        }

        let capacity = f64::from(servers);
        let traffic = cross(
            |traffic| self.wait_probability(traffic, servers),
            |traffic| Ok(frequency * waittime * (capacity / traffic - 1.0)),
            0.0,
            capacity,
            self.precision(precision),
        )?;

        Ok(traffic / frequency)
    }
}
