use queue_sweep_shared::error::SimError;

/// Utilization of a single queue, rejected unless `0 < arrival_rate < service_rate`.
pub fn queue_utilization(arrival_rate: f64, service_rate: f64) -> Result<f64, SimError> {
    if !(service_rate > 0.0 && service_rate.is_finite()) {
        return Err(SimError::invalid(format!(
            "service rate {} must be positive and finite",
            service_rate
        )));
    }
    if !(arrival_rate > 0.0) {
        return Err(SimError::invalid(format!(
            "arrival rate {} must be positive",
            arrival_rate
        )));
    }
    if arrival_rate >= service_rate {
        return Err(SimError::invalid(format!(
            "arrival rate {:.2} must be less than service rate {:.2} for the queue to be stable",
            arrival_rate, service_rate
        )));
    }
    Ok(arrival_rate / service_rate)
}

/// Load factor of every stage in the network, rejected outside `(0, 1)`.
pub fn network_utilization(load_factor: f64) -> Result<f64, SimError> {
    if !(load_factor > 0.0 && load_factor < 1.0) {
        return Err(SimError::invalid(format!(
            "load factor {:.2} must lie strictly between 0 and 1 for the network to be stable",
            load_factor
        )));
    }
    Ok(load_factor)
}

pub fn check_trials(trials: usize) -> Result<(), SimError> {
    if trials == 0 {
        return Err(SimError::invalid("trial count must be positive"));
    }
    Ok(())
}

pub fn check_servers(server_count: usize) -> Result<(), SimError> {
    if server_count == 0 {
        return Err(SimError::invalid("server count must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_utilization_is_ratio() {
        let rho = queue_utilization(0.5, 2.0).unwrap();
        assert!((rho - 0.25).abs() < 1e-12);
    }

    #[test]
    fn queue_rejects_saturated_and_overloaded() {
        for arrival in [1.0, 1.2, f64::INFINITY] {
            let err = queue_utilization(arrival, 1.0).unwrap_err();
            let SimError::InvalidConfiguration(msg) = err;
            assert!(msg.contains("less than service rate"), "msg: {}", msg);
        }
    }

    #[test]
    fn queue_rejects_non_positive_rates() {
        assert!(queue_utilization(0.0, 1.0).is_err());
        assert!(queue_utilization(-0.5, 1.0).is_err());
        assert!(queue_utilization(0.5, 0.0).is_err());
        assert!(queue_utilization(f64::NAN, 1.0).is_err());
        assert!(queue_utilization(0.5, f64::NAN).is_err());
    }

    #[test]
    fn network_requires_open_unit_interval() {
        assert_eq!(network_utilization(0.6), Ok(0.6));
        for load in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(network_utilization(load).is_err(), "load {} accepted", load);
        }
    }

    #[test]
    fn counts_must_be_positive() {
        assert!(check_trials(0).is_err());
        assert!(check_trials(1).is_ok());
        assert!(check_servers(0).is_err());
        assert!(check_servers(5).is_ok());
    }
}
