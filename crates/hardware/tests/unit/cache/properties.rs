//! Replacement Policy Invariants.
//!
//! Property tests over arbitrary access sequences and arbitrary set states:
//! counters never leave their ranges, victims are always valid distant lines,
//! and hits always promote.

use proptest::prelude::*;

use shiprrip_core::cache::policies::Signature;
use shiprrip_core::common::AccessKind;
use shiprrip_core::common::constants::{LLC_WAYS, MAX_RRPV, SHCT_MAX, SHCT_SIZE};
use shiprrip_core::config::{Config, PolicyVariant, ShctScope};
use shiprrip_core::{LlcAccess, LlcReplacementPolicy, ShipRripPolicy};

#[derive(Clone, Debug)]
struct Step {
    core: usize,
    set: usize,
    way: usize,
    pc: u64,
    hit: bool,
}

fn step(cores: usize, sets: usize) -> impl Strategy<Value = Step> {
    (0..cores, 0..sets, 0..LLC_WAYS, any::<u64>(), any::<bool>()).prop_map(
        |(core, set, way, pc, hit)| Step {
            core,
            set,
            way,
            pc,
            hit,
        },
    )
}

fn any_variant() -> impl Strategy<Value = PolicyVariant> {
    prop_oneof![Just(PolicyVariant::ShipRripPlus), Just(PolicyVariant::ShipRrip)]
}

fn config(variant: PolicyVariant) -> Config {
    Config {
        num_cores: 2,
        sets_per_core: 2,
        variant,
        shct_scope: ShctScope::Shared,
        ..Config::default()
    }
}

fn access(step: &Step) -> LlcAccess {
    LlcAccess {
        core: step.core,
        set: step.set,
        pc: step.pc,
        address: 0,
        kind: AccessKind::Load,
    }
}

proptest! {
    /// Every RRPV stays in [0, MAX_RRPV] and every SHCT entry in [0, SHCT_MAX].
    #[test]
    fn counters_stay_in_range(
        variant in any_variant(),
        steps in prop::collection::vec(step(2, 4), 1..200),
    ) {
        let config = config(variant);
        let mut policy = ShipRripPolicy::new(&config);
        for s in &steps {
            let access = access(s);
            if s.hit {
                policy.update(&access, s.way, 0, true);
            } else {
                let way = policy.select_victim(&access, &[]);
                policy.update(&access, way, 0, false);
            }
            for core in 0..config.num_cores {
                for set in 0..config.total_sets() {
                    prop_assert!(policy.lines().set(core, set).iter().all(|r| r.rrpv <= MAX_RRPV));
                    prop_assert!(policy.lines().set(core, set).iter().all(|r| r.signature.index() < SHCT_SIZE));
                }
            }
            prop_assert!(policy.shct(0).counters().iter().all(|&c| c <= SHCT_MAX));
        }
        prop_assert_eq!(policy.stats().accesses(), steps.len() as u64);
    }

    /// From any set state, the victim is a valid way sitting at MAX_RRPV.
    #[test]
    fn victim_is_valid_and_distant(
        variant in any_variant(),
        rrpvs in prop::array::uniform16(0..=MAX_RRPV),
    ) {
        let mut policy = ShipRripPolicy::new(&config(variant));
        for (record, rrpv) in policy.lines_mut().set_mut(0, 0).iter_mut().zip(rrpvs) {
            record.rrpv = rrpv;
        }
        let way = policy.select_victim(&access(&Step { core: 0, set: 0, way: 0, pc: 0, hit: false }), &[]);
        prop_assert!(way < LLC_WAYS);
        prop_assert_eq!(policy.lines().line(0, 0, way).rrpv, MAX_RRPV);
        // Lowest distant way wins.
        let first = policy.lines().set(0, 0).iter().position(|r| r.rrpv == MAX_RRPV);
        prop_assert_eq!(first, Some(way));
    }

    /// After a hit on any way, that way is MRU and marked reused.
    #[test]
    fn hit_promotes(way in 0..LLC_WAYS, sig in 0..SHCT_SIZE, rrpv in 0..=MAX_RRPV) {
        let mut policy = ShipRripPolicy::new(&config(PolicyVariant::ShipRripPlus));
        {
            let record = policy.lines_mut().line_mut(0, 1, way);
            record.rrpv = rrpv;
            record.signature = Signature::from_index(sig);
        }
        let s = Step { core: 0, set: 1, way, pc: 0, hit: true };
        policy.update(&access(&s), way, 0, true);
        let record = policy.lines().line(0, 1, way);
        prop_assert_eq!(record.rrpv, 0);
        prop_assert!(record.reused);
    }
}
