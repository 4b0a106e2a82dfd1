//! Call center queue summary
//!
//! Collects the figures a capacity planner usually looks at for one
//! staffing level in a single serializable value.

use serde::{Deserialize, Serialize};

use crate::blocking::BlockingModel;
use crate::calculator::ErlangC;
use crate::error::Result;
use crate::formulas::no_steady_state;
use crate::types::Param;
use crate::utils::validate_params;

/// Steady state figures for `servers` agents handling `traffic` Erlangs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    /// Offered traffic in Erlangs
    pub traffic: f64,
    /// Number of agents
    pub servers: u32,
    /// Erlang B blocking probability
    pub blocking_probability: f64,
    /// Erlang C probability of waiting
    pub wait_probability: f64,
    /// Share of requests answered within the deadline
    pub service_level: f64,
    /// Average wait in the queue, in service time units
    pub average_wait_time: f64,
    /// Average number of requests waiting
    pub average_queue_length: f64,
    /// Agent occupancy, `A / S`
    pub occupancy: f64,
}

impl<M: BlockingModel> ErlangC<M> {
    /// Compute all queue figures for one staffing level
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErlangError::Undefined`] unless `servers > traffic`.
    pub fn metrics(
        &self,
        traffic: f64,
        servers: u32,
        mean_service_time: f64,
        maxtime: f64,
    ) -> Result<QueueMetrics> {
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(mean_service_time),
            Param::time(maxtime),
        ])?;

        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state("metrics", traffic, servers));
        }

        let wait_probability = self.wait_probability(traffic, servers)?;
        Ok(QueueMetrics {
            traffic,
            servers,
            blocking_probability: self.blocking_probability(traffic, servers)?,
            wait_probability,
            service_level: self.maxtime_probability(traffic, servers, mean_service_time, maxtime)?,
            average_wait_time: self.average_wait_time(traffic, servers, mean_service_time)?,
            average_queue_length: wait_probability * traffic / spare,
            occupancy: traffic / f64::from(servers),
        })
    }
}
