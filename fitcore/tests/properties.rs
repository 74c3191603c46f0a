use fitcore::*;
use fitcore::{
    fit::allocate,
    release::release,
    compact::compact,
    report,
};
use rand::prelude::*;
use std::collections::HashSet;

const ROUNDS: u64 = 200;
const OPS_PER_ROUND: usize = 40;

fn random_tables(rng: &mut StdRng) -> (PartitionTable, ProcessTable) {
    let parts: Vec<MemUnits> = (0..rng.gen_range(0..12))
        .map(|_| rng.gen_range(0..=500))
        .collect();
    let procs: Vec<MemUnits> = (0..rng.gen_range(0..16))
        .map(|_| rng.gen_range(0..=400))
        .collect();

    init(&parts, &procs).unwrap()
}

/// Checks everything that must hold between any two operations.
fn check_invariants(parts: &PartitionTable, procs: &ProcessTable) {
    let mut seen_parts = HashSet::new();
    let mut seen_occupants = HashSet::new();
    for part in parts.iter() {
        assert!(seen_parts.insert(part.id()), "duplicate partition id {}", part.id());
        match part.allocated_process_id() {
            Some(pid)   => {
                assert!(seen_occupants.insert(pid), "process {} placed twice", pid);
                let proc = procs.get(pid).unwrap();
                assert_eq!(proc.home(), Some(part.id()));
                assert_eq!(part.size() + proc.memory_required(), part.original_size());
            },
            None        => {
                assert_eq!(part.size(), part.original_size());
            }
        }
    }
    for proc in procs.iter() {
        match proc.home() {
            Some(home)  => {
                let part = parts.get(home).unwrap();
                assert_eq!(part.allocated_process_id(), Some(proc.id()));
            },
            None        => {
                assert!(parts.holder_of(proc.id()).is_none());
            }
        }
    }
}

#[test]
fn invariants_survive_random_workloads() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut parts, mut procs) = random_tables(&mut rng);
        check_invariants(&parts, &procs);

        for _ in 0..OPS_PER_ROUND {
            match rng.gen_range(0..3) {
                0   => {
                    let strategy = *Strategy::ALL.choose(&mut rng).unwrap();
                    allocate(strategy, &mut parts, &mut procs);
                },
                1   => {
                    let pid = rng.gen_range(1..=procs.len() as ProcessId + 1);
                    let _ = release(&mut parts, &mut procs, pid);
                },
                _   => {
                    compact(&mut parts);
                }
            }
            check_invariants(&parts, &procs);
        }
    }
}

#[test]
fn allocation_is_idempotent() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut parts, mut procs) = random_tables(&mut rng);
        for strategy in Strategy::ALL {
            allocate(strategy, &mut parts, &mut procs);
            let (parts_before, procs_before) = (parts.clone(), procs.clone());
            assert_eq!(allocate(strategy, &mut parts, &mut procs), 0);
            assert_eq!(parts, parts_before);
            assert_eq!(procs, procs_before);
        }
    }
}

#[test]
fn compaction_conserves_free_capacity() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut parts, mut procs) = random_tables(&mut rng);
        let strategy = *Strategy::ALL.choose(&mut rng).unwrap();
        allocate(strategy, &mut parts, &mut procs);
        for pid in 1..=procs.len() as ProcessId {
            if rng.gen_bool(0.3) {
                let _ = release(&mut parts, &mut procs, pid);
            }
        }

        let free = parts.total_free();
        let occupied: Vec<_> = parts.iter()
            .filter(|p| p.is_allocated())
            .cloned()
            .collect();
        let merged = compact(&mut parts);

        assert_eq!(parts.total_free(), free);
        assert_eq!(report::fragmentation(&parts).external, free);
        assert_eq!(report::free_partitions(&parts), usize::from(free > 0));
        assert_eq!(merged.is_some(), free > 0);
        if let Some(id) = merged {
            assert_eq!(parts.iter().last().map(|p| p.id()), Some(id));
        }
        let occupied_after: Vec<_> = parts.iter()
            .filter(|p| p.is_allocated())
            .cloned()
            .collect();
        assert_eq!(occupied, occupied_after);
    }
}

#[test]
fn release_round_trip() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut parts, mut procs) = random_tables(&mut rng);
        let strategy = *Strategy::ALL.choose(&mut rng).unwrap();
        let pristine = parts.clone();
        allocate(strategy, &mut parts, &mut procs);

        for pid in 1..=procs.len() as ProcessId {
            let Some(home) = procs.get(pid).unwrap().home() else { continue };
            assert_eq!(release(&mut parts, &mut procs, pid), Ok(home));
            assert_eq!(parts.get(home).unwrap().size(), pristine.get(home).unwrap().size());
            assert!(!parts.get(home).unwrap().is_allocated());
            assert!(!procs.get(pid).unwrap().is_allocated());
        }
        assert_eq!(parts, pristine);
    }
}
