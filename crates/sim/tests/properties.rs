use proptest::prelude::*;
use queue_sweep_sim::network::NetworkModel;
use queue_sweep_sim::queue::QueueModel;
use queue_sweep_sim::variate::{ShiftedGeometric, VariateSource};

fn next_draw(source: &mut VariateSource) -> u64 {
    let probe = ShiftedGeometric::new(0.5).unwrap();
    source.sample(&probe)
}

proptest! {
    #[test]
    fn unstable_queue_fails_without_drawing(
        service_rate in 0.01f64..100.0,
        excess in 0.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let arrival_rate = service_rate * (1.0 + excess);
        let mut source = VariateSource::new(seed);
        let result = QueueModel::new(&mut source).simulate(arrival_rate, service_rate, 10);
        prop_assert!(result.is_err());

        let mut untouched = VariateSource::new(seed);
        prop_assert_eq!(next_draw(&mut source), next_draw(&mut untouched));
    }

    #[test]
    fn load_outside_unit_interval_fails(
        load in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0],
        servers in 1usize..10,
    ) {
        let mut source = VariateSource::new(0);
        prop_assert!(NetworkModel::new(&mut source).simulate(load, servers, 10).is_err());
    }

    #[test]
    fn batch_length_matches_trial_count(
        rho in 0.01f64..0.95,
        trials in 1usize..500,
        servers in 1usize..8,
        seed in any::<u64>(),
    ) {
        let mut source = VariateSource::new(seed);
        let queue = QueueModel::new(&mut source).simulate(rho, 1.0, trials).unwrap();
        prop_assert_eq!(queue.len(), trials);

        let network = NetworkModel::new(&mut source).simulate(rho, servers, trials).unwrap();
        prop_assert_eq!(network.len(), trials);
    }
}
