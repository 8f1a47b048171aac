// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("argument {arg} does not have expected length {expected}")]
	IncorrectArgumentLength { arg: String, expected: usize },
	#[error("the evaluation domain must contain at least two points")]
	DomainSizeTooSmall,
	#[error("duplicate point in domain")]
	DuplicateDomainPoint,
}
