// Copyright 2025 Irreducible Inc.

use std::iter::repeat_with;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use fliop_core::{
	challenger::RngChallenger,
	protocols::fliop::{gen_vermsg, prove_and_gates, GateBatch, OperandShare, PartyRole},
};
use fliop_field::Mersenne61;
use rand::{rngs::StdRng, Rng, SeedableRng};

const LOG_T: usize = 16;
const K: usize = 8;
const CHALLENGE_SEED: u64 = 0;

fn random_elements(mut rng: impl Rng, n: usize) -> Vec<Mersenne61> {
	repeat_with(|| Mersenne61::random(&mut rng)).take(n).collect()
}

fn bench_prove(c: &mut Criterion) {
	let t = 1 << LOG_T;
	let mut rng = StdRng::seed_from_u64(0);
	let batch = GateBatch {
		a: random_elements(&mut rng, t),
		b: random_elements(&mut rng, t),
		c: random_elements(&mut rng, t),
		d: random_elements(&mut rng, t),
	};

	let mut group = c.benchmark_group("fliop");
	group.throughput(Throughput::Elements(t as u64));
	group.bench_function(format!("prove_and_gates/t=2^{LOG_T}/k={K}"), |bench| {
		bench.iter(|| {
			let mut challenger = RngChallenger::new(StdRng::seed_from_u64(CHALLENGE_SEED));
			prove_and_gates(&batch, K, &mut challenger, &mut rng).unwrap()
		});
	});
	group.finish();
}

fn bench_gen_vermsg(c: &mut Criterion) {
	let t = 1 << LOG_T;
	let mut rng = StdRng::seed_from_u64(0);
	let batch = GateBatch {
		a: random_elements(&mut rng, t),
		b: random_elements(&mut rng, t),
		c: random_elements(&mut rng, t),
		d: random_elements(&mut rng, t),
	};
	let outputs = batch.outputs();

	let mut challenger = RngChallenger::new(StdRng::seed_from_u64(CHALLENGE_SEED));
	let proof = prove_and_gates(&batch, K, &mut challenger, &mut rng).unwrap();
	let (proof_left, _) = proof.into_shares();
	let left_operands = OperandShare {
		x: batch.a,
		y: batch.c,
	};

	let mut group = c.benchmark_group("fliop");
	group.throughput(Throughput::Elements(t as u64));
	group.bench_function(format!("gen_vermsg/t=2^{LOG_T}/k={K}"), |bench| {
		bench.iter(|| {
			let mut challenger = RngChallenger::new(StdRng::seed_from_u64(CHALLENGE_SEED));
			gen_vermsg(
				&proof_left,
				&left_operands,
				&outputs,
				PartyRole::VerifierLeft,
				K,
				&mut challenger,
			)
			.unwrap()
		});
	});
	group.finish();
}

criterion_group!(fliop, bench_prove, bench_gen_vermsg);
criterion_main!(fliop);
