// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the compression factor must be at least 2")]
	CompressionFactorTooSmall,
	#[error("the gate batch must contain at least one instance")]
	EmptyBatch,
	#[error("operand and output arrays must all have the same length")]
	OperandLengthMismatch,
	#[error("party indices must be less than 3")]
	PartyIndexOutOfRange,
	#[error("the proving party cannot take a verifier role")]
	ProverCannotVerify,
	#[error("proof share has {actual} rounds, expected {expected}")]
	ProofShapeRoundCount { expected: usize, actual: usize },
	#[error("proof share round {round} does not hold 2k-1 evaluation shares")]
	ProofShapeRowLength { round: usize },
	#[error("peer verification message does not match the local transcript shape")]
	VerMsgShapeMismatch,
	#[error("math error: {0}")]
	MathError(#[from] fliop_math::Error),
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
	#[error("round {round}: the native evaluation sum does not match the running claim")]
	RoundSumMismatch { round: usize },
	#[error("the final folded operand product does not match the claimed evaluation")]
	FinalProductMismatch,
}
