//! Inversions of the wait probability

use super::relabel;
use crate::blocking::BlockingModel;
use crate::calculator::ErlangC;
use crate::error::{ErlangError, Result};
use crate::search::{generic_servers, generic_traffic};
use crate::types::Param;
use crate::utils::validate_params;

impl<M: BlockingModel> ErlangC<M> {
    /// Fewest servers keeping the wait probability at or below `probability`
    ///
    /// # Errors
    ///
    /// Returns an error for invalid input, or
    /// [`ErlangError::Unreachable`] if the configured server limit is not
    /// enough. A zero target with positive traffic is always unreachable.
    pub fn servers_waitprob(&self, traffic: f64, probability: f64) -> Result<u32> {
        validate_params(&[Param::traffic(traffic), Param::probability(probability)])?;

        if traffic == 0.0 {
            return Ok(0);
        }
        // C(A, S) > 0 for every finite S once A > 0
        if probability == 0.0 {
            let limit = f64::from(self.config().max_servers);
            return Err(ErlangError::unreachable("servers_waitprob", limit));
        }

        generic_servers(
            |servers| Ok(self.wait_probability(traffic, servers)? > probability),
            self.config().max_servers,
        )
        .map_err(relabel("servers_waitprob"))
    }

    /// Most traffic `servers` can take with a wait probability below `probability`
    ///
    /// `precision` defaults to the configured precision.
    pub fn traffic_waitprob(
        &self,
        servers: u32,
        probability: f64,
        precision: Option<f64>,
    ) -> Result<f64> {
        validate_params(&[
            Param::servers(servers),
            Param::probability(probability),
            Param::precision(precision),
        ])?;

        if servers == 0 || probability == 0.0 {
            return Ok(0.0);
        }

        generic_traffic(
            |traffic| Ok(self.wait_probability(traffic, servers)? < probability),
            self.precision(precision),
            f64::from(servers),
        )
        .map_err(relabel("traffic_waitprob"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErlangC, ErlangError};

    #[test]
    fn test_servers_waitprob_reference() {
        let engine = ErlangC::new();
        // C(5, 8) = 0.1673, C(5, 9) = 0.0805, C(5, 10) = 0.0361, C(5, 11) = 0.0151
        assert_eq!(engine.servers_waitprob(5.0, 0.1).unwrap(), 9);
        assert_eq!(engine.servers_waitprob(5.0, 0.0361).unwrap(), 11);
        assert_eq!(engine.servers_waitprob(5.0, 0.0362).unwrap(), 10);
    }

    #[test]
    fn test_servers_waitprob_degenerate() {
        let engine = ErlangC::new();
        assert_eq!(engine.servers_waitprob(0.0, 0.5).unwrap(), 0);
        // every request may wait: no servers needed to meet the target
        assert_eq!(engine.servers_waitprob(5.0, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_servers_waitprob_zero_target_unreachable() {
        let engine = ErlangC::new();
        assert!(matches!(
            engine.servers_waitprob(5.0, 0.0),
            Err(ErlangError::Unreachable { operation: "servers_waitprob", .. })
        ));
        assert_eq!(engine.servers_waitprob(0.0, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_servers_waitprob_rejects_negative_traffic() {
        let engine = ErlangC::new();
        assert!(matches!(
            engine.servers_waitprob(-1.0, 0.5),
            Err(ErlangError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_traffic_waitprob_precision() {
        let engine = ErlangC::new();
        let traffic = engine.traffic_waitprob(10, 0.1, Some(1e-6)).unwrap();
        let wait = engine.wait_probability(traffic, 10).unwrap();
        assert!(wait < 0.1);
        assert!((wait - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_traffic_waitprob_degenerate() {
        let engine = ErlangC::new();
        assert_eq!(engine.traffic_waitprob(0, 0.5, None).unwrap(), 0.0);
        assert_eq!(engine.traffic_waitprob(10, 0.0, None).unwrap(), 0.0);
        assert!(engine.traffic_waitprob(10, 0.5, Some(0.0)).is_err());
    }
}
